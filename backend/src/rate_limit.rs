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

use std::num::NonZeroU32;

use actix_web::{http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use governor::{
    clock::{Clock, QuantaClock, QuantaInstant},
    state::InMemoryState,
    NotUntil, Quota, RateLimiter,
};

fn ip_from_req(req: &HttpRequest) -> actix_web::Result<String> {
    let ip = if let Some(ip) = req.connection_info().realip_remote_addr() {
        ip.to_string()
    } else {
        log::warn!("No ip found for route {}", req.path());
        return Err(crate::error::Error::InternalError.into());
    };

    Ok(ip)
}

#[cfg(test)]
const REQUESTS_PER_SECOND: u32 = 1;

#[cfg(test)]
const REQUESTS_BURST: u32 = 5;

#[cfg(not(test))]
const REQUESTS_PER_SECOND: u32 = 5;

#[cfg(not(test))]
const REQUESTS_BURST: u32 = 25;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct LoginRateLimitKey {
    user: String,
    ip: String,
}

// RateLimiter for the login route
pub struct LoginRateLimiter(
    RateLimiter<
        LoginRateLimitKey,
        dashmap::DashMap<LoginRateLimitKey, InMemoryState>,
        QuantaClock,
        governor::middleware::NoOpMiddleware<governor::clock::QuantaInstant>,
    >,
);

impl Default for LoginRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginRateLimiter {
    pub fn new() -> Self {
        Self(RateLimiter::keyed(
            Quota::per_second(NonZeroU32::new(REQUESTS_PER_SECOND).unwrap())
                .allow_burst(NonZeroU32::new(REQUESTS_BURST).unwrap()),
        ))
    }

    pub fn check(&self, email: String, req: &HttpRequest) -> actix_web::Result<()> {
        let ip = ip_from_req(req)?;

        let key = LoginRateLimitKey { user: email, ip };
        if let Err(err) = self.0.check_key(&key) {
            log::warn!("RateLimiter triggered for {key:?}");
            let now = self.0.clock().now();

            Err(RateLimitError::new(err, now).into())
        } else {
            Ok(())
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DeviceRateLimitKey {
    device_id: i32,
    ip: String,
}

// Rate limiter for all routes that get called by lane hardware
pub struct DeviceRateLimiter(
    RateLimiter<
        DeviceRateLimitKey,
        dashmap::DashMap<DeviceRateLimitKey, InMemoryState>,
        QuantaClock,
        governor::middleware::NoOpMiddleware<governor::clock::QuantaInstant>,
    >,
);

impl Default for DeviceRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceRateLimiter {
    pub fn new() -> Self {
        Self(RateLimiter::keyed(
            Quota::per_second(NonZeroU32::new(REQUESTS_PER_SECOND).unwrap())
                .allow_burst(NonZeroU32::new(REQUESTS_BURST).unwrap()),
        ))
    }

    pub fn check(&self, device_id: i32, req: &HttpRequest) -> actix_web::Result<()> {
        let ip = ip_from_req(req)?;

        let key = DeviceRateLimitKey { device_id, ip };
        if let Err(err) = self.0.check_key(&key) {
            log::warn!("RateLimiter triggered for {key:?}");
            let now = self.0.clock().now();

            Err(RateLimitError::new(err, now).into())
        } else {
            Ok(())
        }
    }
}

#[derive(Debug)]
struct RateLimitError {
    wait_time: NotUntil<QuantaInstant>,
    now: QuantaInstant,
}

impl RateLimitError {
    pub fn new(wait_time: NotUntil<QuantaInstant>, now: QuantaInstant) -> Self {
        Self { wait_time, now }
    }
}

impl std::fmt::Display for RateLimitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let wait_time = self.wait_time.wait_time_from(self.now);
        write!(f, "Retry in {} seconds.", wait_time.as_secs())
    }
}

impl ResponseError for RateLimitError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        StatusCode::TOO_MANY_REQUESTS
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let wait_time = self.wait_time.wait_time_from(self.now);
        HttpResponse::TooManyRequests()
            .append_header(("retry-after", wait_time.as_secs()))
            .append_header(("x-retry-after", wait_time.as_secs()))
            .body(self.to_string())
    }
}
