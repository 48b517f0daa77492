mod client;
mod directory_gate;
mod error;
mod lms;
mod rpc_outcome;
mod rpc_params;
mod site_info;
mod token_issuer;


pub use client::{FileDownload, MoodleClient, MoodleClientConfig};
pub use directory_gate::MoodleDirectoryGate;
pub use error::{MoodleError, Result as MoodleResult};
pub use rpc_outcome::RpcOutcome;
pub use rpc_params::{IntoRpcValue, RpcParams};
pub use site_info::SiteInfo;
pub use token_issuer::MoodleTokenIssuer;

const REST_PATH: &str = "/webservice/rest/server.php";
const TOKEN_PATH: &str = "/login/token.php";
const REST_FORMAT: &str = "json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
