use idtoken::Seconds;
use serde::Deserialize;

//--------------------------------------------------------------------------------------------------
// Config to be read from file
//--------------------------------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct Config {
    #[serde(default)]
    pub debug: bool,
    pub http_port: Option<u16>,
    pub issuer: String,
    pub client_id: String,
    pub algorithm: String,
    pub public_key_path: String,
    pub clock_skew_allowance: Option<Seconds>,
}

//--------------------------------------------------------------------------------------------------
