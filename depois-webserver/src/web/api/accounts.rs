use super::*;

#[post("/signup", data = "<new_account>")]
pub fn post_signup(
    db: sqlite::Connections,
    content_type: Option<&ContentType>,
    new_account: JsonResult<json::NewAccount>,
) -> CreatedResult<json::SignupResponse> {
    if !content_type.is_some_and(|ct| ct.is_json()) {
        return Err(ApiError::OtherWithStatus(
            anyhow!("Expected a JSON request body"),
            Status::UnprocessableEntity,
        ));
    }
    let new_account = from_json::new_account(new_account?.into_inner());
    let account = flows::sign_up(&db, new_account)?;
    Ok((Status::Created, Json(json::SignupResponse::from(&account))))
}

#[get("/accounts/<id>")]
pub fn get_account(db: sqlite::Connections, id: &str) -> Result<json::Account> {
    let account = flows::get_account(&db, id)?;
    Ok(Json(account.into()))
}
