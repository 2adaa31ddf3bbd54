use chrono::NaiveDate;
use uuid::Uuid;

use vehicle_maintenance::config::environment::EngineConfig;
use vehicle_maintenance::{
    CompleteTaskRequest, CreateTaskRequest, CreateVehicleRequest, DashboardService,
    MileageService, NewMileageLog, ReminderService, ReplacementRequest, StatusEngine,
    TaskService, TaskStatus, TaskType, UserPreferences, Vehicle,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn test_engine() -> StatusEngine {
    StatusEngine::new(&EngineConfig {
        due_soon_miles_threshold: 500,
        due_soon_days_threshold: 14,
    })
}

fn register_vehicle(mileage: i64) -> Vehicle {
    let request = CreateVehicleRequest {
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2019,
        color: Some("gray".to_string()),
        license_plate: Some("ABC-1234".to_string()),
        vin: None,
        current_mileage: Some(mileage),
    };
    Vehicle::from_request(Uuid::new_v4(), request).unwrap()
}

#[test]
fn test_reference_scenario_due_soon_by_mileage() {
    let vehicle = register_vehicle(54600);
    let service = TaskService::new(test_engine());

    let task = service
        .create(
            vehicle.user_id,
            CreateTaskRequest {
                vehicle_id: vehicle.id,
                task_type: TaskType::OilChange,
                description: None,
                last_performed_mileage: 50000,
                last_performed_date: date(2024, 1, 15),
                interval_miles: Some(5000),
                interval_months: Some(6),
                cost: None,
                notes: None,
            },
        )
        .unwrap();

    let view = service
        .with_status(&task, vehicle.current_mileage, date(2024, 6, 1))
        .unwrap();

    assert_eq!(view.next_due_mileage, 55000);
    assert_eq!(view.next_due_date, date(2024, 7, 15));
    assert_eq!(view.status, TaskStatus::DueSoon);
}

#[test]
fn test_reference_scenario_overdue_by_mileage() {
    let vehicle = register_vehicle(55200);
    let service = TaskService::new(test_engine());

    let task = service
        .create(
            vehicle.user_id,
            CreateTaskRequest {
                vehicle_id: vehicle.id,
                task_type: TaskType::OilChange,
                description: None,
                last_performed_mileage: 50000,
                last_performed_date: date(2024, 1, 15),
                interval_miles: Some(5000),
                interval_months: Some(6),
                cost: None,
                notes: None,
            },
        )
        .unwrap();

    let view = service
        .with_status(&task, vehicle.current_mileage, date(2024, 6, 1))
        .unwrap();

    // El umbral de millas cruzado manda, da igual lo lejos que quede la fecha
    assert_eq!(view.status, TaskStatus::Overdue);
}

#[test]
fn test_mileage_log_drives_task_into_due_soon() {
    let vehicle = register_vehicle(52000);
    let tasks = TaskService::new(test_engine());
    let mileage = MileageService::new();
    let today = date(2024, 3, 10);

    let task = tasks
        .create(
            vehicle.user_id,
            CreateTaskRequest {
                vehicle_id: vehicle.id,
                task_type: TaskType::OilChange,
                description: None,
                last_performed_mileage: 50000,
                last_performed_date: date(2024, 2, 1),
                interval_miles: Some(5000),
                interval_months: Some(6),
                cost: None,
                notes: None,
            },
        )
        .unwrap();

    let before = tasks
        .with_status(&task, vehicle.current_mileage, today)
        .unwrap();
    assert_eq!(before.status, TaskStatus::Good);

    // Una lectura nueva empuja el odómetro dentro de la ventana de 500 millas
    let (_, vehicle) = mileage
        .record(
            &vehicle,
            NewMileageLog {
                vehicle_id: vehicle.id,
                mileage: 54700,
                date: None,
                notes: Some("road trip".to_string()),
            },
            today,
        )
        .unwrap();

    let after = tasks
        .with_status(&task, vehicle.current_mileage, today)
        .unwrap();
    assert_eq!(after.status, TaskStatus::DueSoon);
}

#[test]
fn test_complete_task_resets_cycle_and_advances_odometer() {
    let vehicle = register_vehicle(54600);
    let service = TaskService::new(test_engine());
    let today = date(2024, 6, 1);

    let task = service
        .create(
            vehicle.user_id,
            CreateTaskRequest {
                vehicle_id: vehicle.id,
                task_type: TaskType::OilChange,
                description: None,
                last_performed_mileage: 50000,
                last_performed_date: date(2024, 1, 15),
                interval_miles: Some(5000),
                interval_months: Some(6),
                cost: None,
                notes: None,
            },
        )
        .unwrap();

    let (task, vehicle) = service
        .complete(&task, &vehicle, CompleteTaskRequest { mileage: 54900 }, today)
        .unwrap();

    assert_eq!(task.last_performed_mileage, 54900);
    assert_eq!(task.last_performed_date, today);
    assert_eq!(vehicle.current_mileage, 54900);

    // El ciclo vuelve a empezar: el siguiente due queda lejos otra vez
    let view = service
        .with_status(&task, vehicle.current_mileage, today)
        .unwrap();
    assert_eq!(view.next_due_mileage, 59900);
    assert_eq!(view.status, TaskStatus::Good);
}

#[test]
fn test_replacement_request_overrides_and_complete_clears_it() {
    let vehicle = register_vehicle(51000);
    let service = TaskService::new(test_engine());
    let today = date(2024, 2, 1);

    let task = service
        .create(
            vehicle.user_id,
            CreateTaskRequest {
                vehicle_id: vehicle.id,
                task_type: TaskType::Brakes,
                description: None,
                last_performed_mileage: 50000,
                last_performed_date: date(2024, 1, 15),
                interval_miles: None,
                interval_months: None,
                cost: None,
                notes: None,
            },
        )
        .unwrap();

    let flagged = service
        .request_replacement(
            &task,
            ReplacementRequest {
                reason: "grinding when braking".to_string(),
            },
        )
        .unwrap();

    // El override gana aunque la tarea esté lejos de su vencimiento
    let view = service
        .with_status(&flagged, vehicle.current_mileage, today)
        .unwrap();
    assert_eq!(view.status, TaskStatus::ReplacementRequested);

    let (completed, _) = service
        .complete(&flagged, &vehicle, CompleteTaskRequest { mileage: 51500 }, today)
        .unwrap();
    assert!(!completed.replacement_requested);
    assert!(completed.replacement_reason.is_none());

    let view = service
        .with_status(&completed, 51500, today)
        .unwrap();
    assert_eq!(view.status, TaskStatus::Good);
}

#[test]
fn test_dashboard_and_reminders_agree_on_urgency() {
    let vehicle = register_vehicle(54600);
    let tasks_service = TaskService::new(test_engine());
    let dashboard = DashboardService::new(test_engine());
    let reminders = ReminderService::new(test_engine());
    let today = date(2024, 6, 1);

    let overdue = tasks_service
        .create(
            vehicle.user_id,
            CreateTaskRequest {
                vehicle_id: vehicle.id,
                task_type: TaskType::OilChange,
                description: None,
                last_performed_mileage: 49000,
                last_performed_date: date(2024, 1, 15),
                interval_miles: Some(5000),
                interval_months: Some(6),
                cost: None,
                notes: None,
            },
        )
        .unwrap();

    let good = tasks_service
        .create(
            vehicle.user_id,
            CreateTaskRequest {
                vehicle_id: vehicle.id,
                task_type: TaskType::SparkPlugs,
                description: None,
                last_performed_mileage: 54000,
                last_performed_date: date(2024, 5, 1),
                interval_miles: None,
                interval_months: None,
                cost: None,
                notes: None,
            },
        )
        .unwrap();

    let all_tasks = vec![overdue, good];
    let vehicles = vec![vehicle];

    let stats = dashboard.summarize(&vehicles, &all_tasks, today).unwrap();
    assert_eq!(stats.overdue, 1);
    assert_eq!(stats.good, 1);

    let notices = reminders
        .pending(&UserPreferences::default(), &vehicles, &all_tasks, today)
        .unwrap();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].task_type, TaskType::OilChange);
    assert_eq!(notices[0].status, TaskStatus::Overdue);
}

#[test]
fn test_zero_interval_task_fails_loudly_everywhere() {
    let vehicle = register_vehicle(54600);
    let service = TaskService::new(test_engine());

    let mut task = service
        .create(
            vehicle.user_id,
            CreateTaskRequest {
                vehicle_id: vehicle.id,
                task_type: TaskType::Coolant,
                description: None,
                last_performed_mileage: 50000,
                last_performed_date: date(2024, 1, 15),
                interval_miles: None,
                interval_months: None,
                cost: None,
                notes: None,
            },
        )
        .unwrap();

    // Un registro corrupto con intervalo cero no se corrige en silencio
    task.interval_miles = 0;

    assert!(service
        .with_status(&task, vehicle.current_mileage, date(2024, 6, 1))
        .is_err());
    assert!(DashboardService::new(test_engine())
        .summarize(&[vehicle], &[task], date(2024, 6, 1))
        .is_err());
}
