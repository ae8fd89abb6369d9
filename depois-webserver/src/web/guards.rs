/// The version of the running server.
pub struct Version(pub &'static str);
