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

use db_connector::models::users::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Operator account without the password hash.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FilteredUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for FilteredUser {
    fn from(value: User) -> Self {
        FilteredUser {
            id: value.id.to_string(),
            name: value.name,
            email: value.email,
            role: value.role,
        }
    }
}
