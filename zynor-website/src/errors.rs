/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use http::status::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SiteError {
    #[error("Page Not Found")]
    NotFound,
    #[error("Internal Server Error")]
    InternalServerError,
}

impl SiteError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SiteError::NotFound => StatusCode::NOT_FOUND,
            SiteError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
