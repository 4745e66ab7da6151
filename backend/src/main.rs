/* gatewatch
 * Copyright (C) 2026 The gatewatch authors
 *
 * This library is free software; you can redistribute it and/or
 * modify it under the terms of the GNU Lesser General Public
 * License as published by the Free Software Foundation; either
 * version 2 of the License, or (at your option) any later version.
 *
 * This library is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
 * Lesser General Public License for more details.
 *
 * You should have received a copy of the GNU Lesser General Public
 * License along with this library; if not, write to the
 * Free Software Foundation, Inc., 59 Temple Place - Suite 330,
 * Boston, MA 02111-1307, USA.
 */

use std::io::BufReader;

use actix_files::{Files, NamedFile};
use actix_web::{
    dev::{fn_service, ServiceRequest, ServiceResponse},
    middleware::{Compress, Logger},
    web, App, HttpServer,
};
pub use backend::*;

use db_connector::{get_connection_pool, run_migrations};
use rate_limit::{DeviceRateLimiter, LoginRateLimiter};
use rustls::ServerConfig;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};

#[cfg(not(debug_assertions))]
use simplelog::WriteLogger;

fn load_rustls_config() -> Option<ServerConfig> {
    let cert_path = std::env::var("TLS_CERT_PATH").ok()?;
    let key_path = std::env::var("TLS_KEY_PATH").ok()?;

    let cert_file = &mut BufReader::new(std::fs::File::open(&cert_path).ok()?);
    let key_file = &mut BufReader::new(std::fs::File::open(&key_path).ok()?);

    let cert_chain: Vec<_> = rustls_pemfile::certs(cert_file)
        .filter_map(|c| c.ok())
        .collect();
    let key = rustls_pemfile::private_key(key_file).ok()??;

    let config = ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(cert_chain, key)
        .ok()?;

    Some(config)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap()
        .build();

    #[cfg(not(debug_assertions))]
    let write_logger = WriteLogger::new(
        LevelFilter::Info,
        log_config.clone(),
        std::fs::File::create(format!(
            "/logs/backend-{}.log",
            chrono::Local::now().format("%Y-%m-%d-%H")
        ))
        .unwrap(),
    );

    #[cfg(debug_assertions)]
    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Debug,
        log_config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    #[cfg(not(debug_assertions))]
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            log_config,
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        write_logger,
    ])
    .unwrap();

    dotenvy::dotenv().ok();

    let pool = get_connection_pool();
    let mut conn = pool.get().expect("Failed to get connection from pool");
    run_migrations(&mut conn).expect("Failed to run migrations");

    let state = web::Data::new(AppState {
        pool,
        jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET must be set!"),
    });

    let login_ratelimiter = web::Data::new(LoginRateLimiter::new());
    let device_ratelimiter = web::Data::new(DeviceRateLimiter::new());

    let static_files_dir =
        std::env::var("STATIC_FILES_DIR").unwrap_or_else(|_| "./dashboard".to_string());

    let server = HttpServer::new(move || {
        let cors = actix_cors::Cors::permissive();
        let static_dir = static_files_dir.clone();
        App::new()
            .wrap(cors)
            .wrap(Compress::default())
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(login_ratelimiter.clone())
            .app_data(device_ratelimiter.clone())
            .service(web::scope("/api").configure(routes::configure))
            .service(
                Files::new("/", &static_dir)
                    .index_file("index.html")
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let static_dir = static_dir.clone();
                        async move {
                            let (req, _) = req.into_parts();
                            let index_path = format!("{}/index.html", static_dir);
                            let file = NamedFile::open(&index_path)?.set_content_disposition(
                                actix_web::http::header::ContentDisposition {
                                    disposition: actix_web::http::header::DispositionType::Inline,
                                    parameters: vec![],
                                },
                            );
                            let res = file.into_response(&req);
                            Ok(ServiceResponse::new(req, res))
                        }
                    })),
            )
    });

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8081".to_string());

    if let Some(tls_config) = load_rustls_config() {
        server.bind_rustls_0_23(&addr, tls_config)?.run().await?;
    } else {
        log::warn!("No TLS certificate configured, serving plain http on {addr}");
        server.bind(&addr)?.run().await?;
    }

    Ok(())
}
