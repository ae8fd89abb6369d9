use std::{fmt::Display, result};

use anyhow::anyhow;

use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, get,
    http::{ContentType, Status},
    post,
    response::{self, Responder},
    routes, Route, State,
};

use super::{guards::*, sqlite};
use crate::adapters::json::{self, from_json};
use depois_application::prelude as flows;

mod accounts;
mod error;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type CreatedResult<T> = result::Result<(Status, Json<T>), ApiError>;

pub type ErrorBody = Json<json::Error>;

/// Message of all responses with status `500 Internal Server Error`.
///
/// Details about unexpected errors are only logged and
/// never revealed to the client.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected Error";

pub fn routes() -> Vec<Route> {
    routes![
        // ---   accounts   --- //
        accounts::post_signup,
        accounts::get_account,
        // ---   server   --- //
        util::get_version,
    ]
}

/// Routes that are available without the `/api` prefix.
pub fn compat_routes() -> Vec<Route> {
    routes![accounts::post_signup]
}

pub fn error_body_for_status(status: Status) -> ErrorBody {
    let error = if status.class().is_server_error() {
        UNEXPECTED_ERROR_MESSAGE
    } else {
        status.reason().unwrap_or("Unknown error")
    };
    Json(json::Error {
        error: error.to_string(),
    })
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let boundary_error = json::Error {
        error: err.to_string(),
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
