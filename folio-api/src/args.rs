use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct RunArgs {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Database connection url
    #[arg(short, long, default_value = "sqlite://folio.db?mode=rwc")]
    pub db: String,

    /// Database name, created on startup when the backend supports it
    #[arg(long, default_value = "folio")]
    pub db_name: String,

    /// Drop and recreate all tables on startup
    #[arg(long)]
    pub fresh: bool,

    /// Directory where uploaded photos are kept
    #[arg(short, long, default_value = "uploads")]
    pub uploads: std::path::PathBuf,
}
