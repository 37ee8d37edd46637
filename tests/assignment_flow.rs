//! Tests de integración contra PostgreSQL
//!
//! Requieren una base de datos accesible vía DATABASE_URL; se ignoran por
//! defecto. Ejecutar con `cargo test -- --ignored`. Cada test usa un rango
//! de ids propio para poder correr contra una base compartida.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use fleet_registry::controllers::{
    DriverController, FleetController, RouteController, RouteDetailController, VehicleController,
};
use fleet_registry::models::driver::CreateDriverRequest;
use fleet_registry::models::fleet::{CreateFleetRequest, UpdateFleetRequest};
use fleet_registry::models::route::CreateRouteRequest;
use fleet_registry::models::route_detail::{
    CreateRouteDetailRequest, DeleteRouteDetailQuery, RouteDetail, RouteDetailNameFilters,
};
use fleet_registry::models::vehicle::{CreateVehicleRequest, VehicleFilters};
use fleet_registry::repositories::{
    DriverRepository, FleetRepository, RouteDetailRepository, VehicleRepository,
};
use fleet_registry::utils::errors::AppError;

async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL debe apuntar a una base de datos de test");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("conexión a la base de datos de test");

    // Aprovisionar el esquema si aún no existe
    for statement in include_str!("../migrations/001_create_tables.sql").split(';') {
        let statement = statement.trim();
        if !statement.is_empty() {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .expect("aplicar esquema");
        }
    }

    pool
}

fn fleet_request(id: i64, name: &str) -> CreateFleetRequest {
    CreateFleetRequest {
        id,
        name: name.to_string(),
    }
}

fn vehicle_request(id: i64, name: &str, owner_id: i64) -> CreateVehicleRequest {
    CreateVehicleRequest {
        id,
        name: name.to_string(),
        owner_id,
    }
}

fn name_filters(
    route_name: Option<&str>,
    vehicle_name: Option<&str>,
    driver_name: Option<&str>,
) -> RouteDetailNameFilters {
    RouteDetailNameFilters {
        route_name: route_name.map(str::to_string),
        vehicle_name: vehicle_name.map(str::to_string),
        driver_name: driver_name.map(str::to_string),
    }
}

#[tokio::test]
#[ignore = "requiere PostgreSQL con DATABASE_URL"]
async fn test_fleet_create_get_update_delete() {
    let pool = test_pool().await;
    let fleets = FleetController::new(pool.clone());

    let created = fleets
        .create(fleet_request(9001, "itest-fleet-9001"))
        .await
        .expect("crear flota");
    assert_eq!(created.id, 9001);
    assert_eq!(created.name, "itest-fleet-9001");

    let fetched = fleets.get_by_id(9001).await.expect("leer flota");
    assert_eq!(fetched, created);

    let by_name = fleets
        .get_by_name("itest-fleet-9001")
        .await
        .expect("leer flota por nombre");
    assert_eq!(by_name.id, 9001);

    // Renombrar sobre su propio nombre no es conflicto
    let updated = fleets
        .update(
            9001,
            UpdateFleetRequest {
                name: "itest-fleet-9001".to_string(),
            },
        )
        .await
        .expect("renombrar a su propio nombre");
    assert_eq!(updated.name, "itest-fleet-9001");

    fleets.delete(9001).await.expect("borrar flota");

    let err = fleets.get_by_id(9001).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore = "requiere PostgreSQL con DATABASE_URL"]
async fn test_duplicate_fleet_name_is_rejected() {
    let pool = test_pool().await;
    let fleets = FleetController::new(pool.clone());
    let repository = FleetRepository::new(pool);

    fleets
        .create(fleet_request(9010, "itest-fleet-dup"))
        .await
        .expect("crear flota");

    let err = fleets
        .create(fleet_request(9011, "itest-fleet-dup"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // El intento rechazado no deja fila
    assert!(repository.get(9011).await.expect("leer").is_none());

    fleets.delete(9010).await.expect("limpiar");
}

#[tokio::test]
#[ignore = "requiere PostgreSQL con DATABASE_URL"]
async fn test_duplicate_id_is_rejected_before_name_check() {
    let pool = test_pool().await;
    let fleets = FleetController::new(pool);

    fleets
        .create(fleet_request(9020, "itest-fleet-9020"))
        .await
        .expect("crear flota");

    // Mismo id y mismo nombre a la vez: gana el check de identidad
    let err = fleets
        .create(fleet_request(9020, "itest-fleet-9020"))
        .await
        .unwrap_err();
    match err {
        AppError::Conflict(message) => assert!(message.contains("id")),
        other => panic!("se esperaba Conflict, fue {:?}", other),
    }

    fleets.delete(9020).await.expect("limpiar");
}

#[tokio::test]
#[ignore = "requiere PostgreSQL con DATABASE_URL"]
async fn test_vehicle_requires_existing_fleet() {
    let pool = test_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let repository = VehicleRepository::new(pool);

    let err = vehicles
        .create(vehicle_request(9030, "itest-vehicle-9030", 999_999))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    assert!(repository.get(9030).await.expect("leer").is_none());
}

#[tokio::test]
#[ignore = "requiere PostgreSQL con DATABASE_URL"]
async fn test_delete_missing_fleet_is_not_found() {
    let pool = test_pool().await;
    let fleets = FleetController::new(pool);

    let err = fleets.delete(999_998).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore = "requiere PostgreSQL con DATABASE_URL"]
async fn test_assignment_flow_with_cascading_delete() {
    let pool = test_pool().await;
    let fleets = FleetController::new(pool.clone());
    let vehicles = VehicleController::new(pool.clone());
    let drivers = DriverController::new(pool.clone());
    let routes = RouteController::new(pool.clone());
    let details = RouteDetailController::new(pool.clone());
    let detail_repository = RouteDetailRepository::new(pool.clone());

    fleets
        .create(fleet_request(9101, "itest-fleet-9101"))
        .await
        .expect("crear flota");
    vehicles
        .create(vehicle_request(9110, "itest-vehicle-9110", 9101))
        .await
        .expect("crear vehículo");
    drivers
        .create(CreateDriverRequest {
            id: 9102,
            name: "itest-driver-9102".to_string(),
        })
        .await
        .expect("crear conductor");
    routes
        .create(CreateRouteRequest {
            id: 9100,
            name: "itest-route-9100".to_string(),
        })
        .await
        .expect("crear ruta");

    let detail = details
        .create(CreateRouteDetailRequest {
            route_id: 9100,
            vehicle_id: 9110,
            driver_id: 9102,
        })
        .await
        .expect("crear asignación");
    assert_eq!(
        detail,
        RouteDetail {
            route_id: 9100,
            vehicle_id: 9110,
            driver_id: 9102,
        }
    );

    // Un solo nombre aplica un solo predicado
    let by_route = details
        .get_by_name(name_filters(Some("itest-route-9100"), None, None))
        .await
        .expect("filtrar por ruta");
    assert_eq!(by_route, vec![detail.clone()]);

    let by_driver = details
        .get_by_name(name_filters(None, None, Some("itest-driver-9102")))
        .await
        .expect("filtrar por conductor");
    assert_eq!(by_driver, vec![detail.clone()]);

    // Los predicados presentes se conjugan: uno que no casa vacía el resultado
    let mismatched = details
        .get_by_name(name_filters(
            Some("itest-route-9100"),
            Some("no-such-vehicle"),
            None,
        ))
        .await
        .expect("filtrar con nombre que no casa");
    assert!(mismatched.is_empty());

    // Filtrado de vehículos por propietario
    let owned = vehicles
        .filter(VehicleFilters {
            owner_id: Some(9101),
            name: None,
        })
        .await
        .expect("filtrar vehículos por flota");
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, 9110);

    // Borrar la flota arrastra el vehículo y la asignación
    fleets.delete(9101).await.expect("borrar flota");

    let err = vehicles.get_by_id(9110).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let remaining = detail_repository
        .get_by_vehicle_id(9110)
        .await
        .expect("leer asignaciones del vehículo");
    assert!(remaining.is_empty());

    // La ruta sobrevive y su lista de asignaciones queda vacía (200, no 404)
    let by_route = details
        .get_by_route_id(9100)
        .await
        .expect("leer asignaciones de la ruta");
    assert!(by_route.is_empty());

    // La ruta y el conductor sobreviven
    routes.get_by_id(9100).await.expect("la ruta sigue");
    drivers.get_by_id(9102).await.expect("el conductor sigue");

    routes.delete(9100).await.expect("limpiar ruta");
    drivers.delete(9102).await.expect("limpiar conductor");
}

#[tokio::test]
#[ignore = "requiere PostgreSQL con DATABASE_URL"]
async fn test_duplicate_assignment_pair_is_rejected() {
    let pool = test_pool().await;
    let fleets = FleetController::new(pool.clone());
    let vehicles = VehicleController::new(pool.clone());
    let drivers = DriverController::new(pool.clone());
    let routes = RouteController::new(pool.clone());
    let details = RouteDetailController::new(pool.clone());

    fleets
        .create(fleet_request(9201, "itest-fleet-9201"))
        .await
        .expect("crear flota");
    vehicles
        .create(vehicle_request(9210, "itest-vehicle-9210", 9201))
        .await
        .expect("crear vehículo");
    drivers
        .create(CreateDriverRequest {
            id: 9202,
            name: "itest-driver-9202".to_string(),
        })
        .await
        .expect("crear conductor");
    drivers
        .create(CreateDriverRequest {
            id: 9203,
            name: "itest-driver-9203".to_string(),
        })
        .await
        .expect("crear segundo conductor");
    routes
        .create(CreateRouteRequest {
            id: 9200,
            name: "itest-route-9200".to_string(),
        })
        .await
        .expect("crear ruta");

    details
        .create(CreateRouteDetailRequest {
            route_id: 9200,
            vehicle_id: 9210,
            driver_id: 9202,
        })
        .await
        .expect("crear asignación");

    // El par (route_id, vehicle_id) es la identidad; cambiar el conductor
    // no la cambia
    let err = details
        .create(CreateRouteDetailRequest {
            route_id: 9200,
            vehicle_id: 9210,
            driver_id: 9203,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    details
        .delete(DeleteRouteDetailQuery {
            route_id: 9200,
            vehicle_id: 9210,
            driver_id: 9202,
        })
        .await
        .expect("borrar asignación");

    fleets.delete(9201).await.expect("limpiar flota");
    routes.delete(9200).await.expect("limpiar ruta");
    drivers.delete(9202).await.expect("limpiar conductor");
    drivers.delete(9203).await.expect("limpiar segundo conductor");
}

#[tokio::test]
#[ignore = "requiere PostgreSQL con DATABASE_URL"]
async fn test_assignment_create_names_the_missing_parent() {
    let pool = test_pool().await;
    let details = RouteDetailController::new(pool);

    let err = details
        .create(CreateRouteDetailRequest {
            route_id: 999_900,
            vehicle_id: 999_910,
            driver_id: 999_920,
        })
        .await
        .unwrap_err();
    match err {
        AppError::NotFound(message) => assert!(message.starts_with("Route")),
        other => panic!("se esperaba NotFound, fue {:?}", other),
    }
}

#[tokio::test]
#[ignore = "requiere PostgreSQL con DATABASE_URL"]
async fn test_id_resolution_by_name() {
    let pool = test_pool().await;
    let drivers = DriverController::new(pool.clone());
    let repository = DriverRepository::new(pool);

    drivers
        .create(CreateDriverRequest {
            id: 9301,
            name: "itest-driver-9301".to_string(),
        })
        .await
        .expect("crear conductor");

    let ids = repository
        .get_id_by_name("itest-driver-9301")
        .await
        .expect("resolver ids por nombre");
    assert_eq!(ids, vec![9301]);

    let none = repository
        .get_id_by_name("itest-no-such-driver")
        .await
        .expect("resolver nombre inexistente");
    assert!(none.is_empty());

    drivers.delete(9301).await.expect("limpiar");
}
