#![allow(clippy::all)]

mod args;
mod cache;
mod entity;
mod errors;
mod migrator;
mod service;
mod storage;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};
use clap::Parser;
use log::{log, Level};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbBackend, DbErr, Statement};
use tokio::sync::Mutex;

use args::RunArgs;
use cache::FileCache;
use service::DbConnection;
use storage::PhotoStore;

fn configure_services(cfg: &mut web::ServiceConfig) {
    cfg.service(service::hello_world);
    service::blog::configure_service(cfg);
    service::photos::configure_service(cfg);
    service::comments::configure_service(cfg);
    service::reactions::configure_service(cfg);
}

async fn setup_database(
    db_url: &str,
    db_name: &str,
    fresh: bool,
) -> Result<DatabaseConnection, DbErr> {
    use sea_orm_migration::prelude::*;

    let mut c_opt = ConnectOptions::new(db_url);
    c_opt.sqlx_logging(false);

    let db = Database::connect(c_opt).await?;

    let db = match db.get_database_backend() {
        DbBackend::MySql => {
            db.execute(Statement::from_string(
                db.get_database_backend(),
                format!("CREATE DATABASE IF NOT EXISTS `{}`;", db_name),
            ))
            .await?;
            let url = format!("{}/{}", db_url, db_name);
            Database::connect(url).await?
        }
        DbBackend::Postgres => panic!("postgresql is not supported"),
        DbBackend::Sqlite => db,
    };

    if fresh {
        migrator::Migrator::fresh(&db).await?;
    }
    migrator::Migrator::up(&db, None).await?;

    Ok(db)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));

    let args = RunArgs::parse();

    log!(
        Level::Info,
        "Running folio server on {}:{}\nwith database url: {} and database name: {}",
        &args.address,
        &args.port,
        &args.db,
        &args.db_name
    );
    create_and_run_server(&args).await?.await?;
    Ok(())
}

async fn create_and_run_server(args: &RunArgs) -> std::io::Result<Server> {
    let db = setup_database(&args.db, &args.db_name, args.fresh)
        .await
        .unwrap_or_else(|e| panic!("database setup error: {}", e));

    let db = DbConnection::new(db);
    let store = PhotoStore::new(args.uploads.clone());
    let cache = web::Data::from(Arc::new(Mutex::new(FileCache::new())));

    Ok(HttpServer::new(move || {
        let cors = Cors::permissive();
        App::new()
            .configure(configure_services)
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(store.clone()))
            .app_data(cache.clone())
            .wrap(Logger::default())
            .wrap(cors)
    })
    .bind((args.address.clone(), args.port))?
    .run())
}
