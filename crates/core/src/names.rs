// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::store::Store;
use inn_domain::{Company, Guest, GuestOrCompany, Room, RoomId};
use std::collections::HashMap;

/// Display names looked up once per view.
pub(crate) struct Names {
    rooms: HashMap<RoomId, String>,
    guests: HashMap<String, String>,
    companies: HashMap<String, String>,
}

impl Names {
    pub(crate) fn load(store: &dyn Store, rooms: &[Room]) -> Result<Self, CoreError> {
        let guests: Vec<Guest> = store.guests()?;
        let companies: Vec<Company> = store.companies()?;
        Ok(Self {
            rooms: rooms
                .iter()
                .map(|r| (r.id.clone(), r.identifier.clone()))
                .collect(),
            guests: guests
                .into_iter()
                .map(|g| (g.id.to_string(), g.full_name))
                .collect(),
            companies: companies
                .into_iter()
                .map(|c| (c.id.to_string(), c.name))
                .collect(),
        })
    }

    pub(crate) fn party(&self, party: &GuestOrCompany) -> String {
        let names: &HashMap<String, String> = match party {
            GuestOrCompany::Guest(_) => &self.guests,
            GuestOrCompany::Company(_) => &self.companies,
        };
        names
            .get(party.id_str())
            .cloned()
            .unwrap_or_else(|| party.id_str().to_string())
    }

    pub(crate) fn room(&self, room_id: &RoomId) -> String {
        self.rooms
            .get(room_id)
            .cloned()
            .unwrap_or_else(|| room_id.to_string())
    }
}
