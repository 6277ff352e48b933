use crate::{
    api::{attendance, employee},
    config::Config,
};
use actix_governor::{
    governor::middleware::NoOpMiddleware, Governor, GovernorConfig, GovernorConfigBuilder,
    PeerIpKeyExtractor,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    fn build_limiter(requests_per_min: u32) -> GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap()
    }

    let api_limiter = build_limiter(config.rate_api_per_min);

    cfg.service(
        web::scope("/employees")
            .wrap(Governor::new(&api_limiter))
            // /employees
            .service(
                web::resource("")
                    .route(web::get().to(employee::list_employees))
                    .route(web::post().to(employee::create_employee)),
            )
            // /employees/{employee_id}
            .service(
                web::resource("/{employee_id}")
                    .route(web::get().to(employee::get_employee))
                    .route(web::put().to(employee::update_employee))
                    .route(web::delete().to(employee::delete_employee)),
            ),
    );

    cfg.service(
        web::scope("/attendance")
            .wrap(Governor::new(&api_limiter))
            // /attendance
            .service(
                web::resource("")
                    .route(web::get().to(attendance::list_attendance))
                    .route(web::post().to(attendance::mark_attendance)),
            )
            // GET takes an employee_id, PUT/DELETE take a record id
            .service(
                web::resource("/{id}")
                    .route(web::get().to(attendance::list_employee_attendance))
                    .route(web::put().to(attendance::update_attendance))
                    .route(web::delete().to(attendance::delete_attendance)),
            ),
    );
}
