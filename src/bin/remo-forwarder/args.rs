use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long, env = "REMO_TOKEN", hide_env_values = true)]
    pub remo_token: String,

    #[arg(long, env = "SERVICE_CREDENTIALS", default_value = "./serviceAccount.json")]
    pub credentials_file: PathBuf,

    #[arg(long, env = "ROOM_CONDITIONS_COLLECTION", default_value = "roomConditions")]
    pub collection: String,
}
