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

use db_connector::Pool;

pub mod access_control;
pub mod error;
pub mod middleware;
pub mod models;
pub mod rate_limit;
pub mod routes;
pub mod utils;

pub struct AppState {
    pub pool: Pool,
    pub jwt_secret: String,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use actix_web::{
        body::BoxBody,
        dev::{Service, ServiceResponse},
        test,
        web::{self, ServiceConfig},
    };

    pub struct ScopeCall<F: FnMut()> {
        pub c: F,
    }
    impl<F: FnMut()> Drop for ScopeCall<F> {
        fn drop(&mut self) {
            (self.c)();
        }
    }

    #[macro_export]
    macro_rules! defer {
        ($e:expr) => {
            let _scope_call = crate::tests::ScopeCall {
                c: || -> () {
                    $e;
                },
            };
        };
    }

    pub async fn call_service<S, R, E>(app: &S, req: R) -> S::Response
    where
        S: Service<R, Response = ServiceResponse<BoxBody>, Error = E>,
        E: std::fmt::Debug + Into<actix_web::Error>,
    {
        match test::try_call_service(app, req).await {
            Ok(r) => r,
            Err(_err) => {
                ServiceResponse::from_err(_err, test::TestRequest::default().to_http_request())
            }
        }
    }

    pub fn configure(cfg: &mut ServiceConfig) {
        let pool = db_connector::test_connection_pool();

        let state = AppState {
            pool,
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET must be set!"),
        };

        let state = web::Data::new(state);
        cfg.app_data(state);
        cfg.app_data(web::Data::new(crate::rate_limit::LoginRateLimiter::new()));
        cfg.app_data(web::Data::new(crate::rate_limit::DeviceRateLimiter::new()));
    }
}
