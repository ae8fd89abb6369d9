use super::*;

pub fn get_account(connections: &sqlite::Connections, id: &str) -> Result<Account> {
    let db = connections.shared()?;
    Ok(usecases::get_account(&db, id)?)
}
