use std::net::IpAddr;

use rocket::{catch, catchers, config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
mod sqlite;


#[derive(Debug, Clone)]
pub struct Cfg {
    pub address: IpAddr,
    pub port: u16,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        version,
    } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let version = guards::Version(version);

    let mut instance = r
        .manage(db)
        .manage(version)
        .register("/", catchers![default_catcher]);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

// Requests that are not handled by any route or that
// caused a panic get the same JSON error body as the API.
#[catch(default)]
fn default_catcher(
    status: rocket::http::Status,
    req: &rocket::Request,
) -> (rocket::http::Status, api::ErrorBody) {
    debug!("{} {} failed with status {}", req.method(), req.uri(), status);
    (status, api::error_body_for_status(status))
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", api::compat_routes())]
}

pub async fn run(db: sqlite::Connections, enable_cors: bool, cfg: Cfg, version: &'static str) {
    let Cfg { address, port } = cfg;
    let mut rocket_cfg = RocketCfg::default();
    rocket_cfg.address = address;
    rocket_cfg.port = port;

    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        version,
    };

    let instance = rocket_instance(options, db);
    info!("Initialization finished");
    let server_task = if enable_cors {
        let cors = match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        };
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
