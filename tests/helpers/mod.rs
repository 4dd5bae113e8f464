//! In-memory management API used by the provisioning tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use twin_provision::error::TwinApiError;
use twin_provision::twin::{space_filter, ApiResult};
use twin_provision::{Space, SpaceCreate, TwinApi};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Query(String),
    Create(SpaceCreate),
}

#[derive(Default)]
pub struct FakeTwin {
    spaces: Mutex<Vec<Space>>,
    calls: Mutex<Vec<Call>>,
    next_id: Mutex<u128>,
    reject_create: Mutex<HashSet<String>>,
    garbage_create: Mutex<HashSet<String>>,
    nil_create: Mutex<HashSet<String>>,
    fail_queries: Mutex<bool>,
}

impl FakeTwin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a space directly to the store, bypassing the call log
    pub fn seed(&self, name: &str, parent: Option<Uuid>) -> Uuid {
        let id = self.allocate_id();
        self.spaces.lock().unwrap().push(Space {
            id,
            name: name.to_string(),
            parent_space_id: parent,
            extra: Default::default(),
        });
        id
    }

    /// Add an existing space that carries the nil guid
    pub fn seed_nil(&self, name: &str, parent: Option<Uuid>) {
        self.spaces.lock().unwrap().push(Space {
            id: Uuid::nil(),
            name: name.to_string(),
            parent_space_id: parent,
            extra: Default::default(),
        });
    }

    /// Answer `POST spaces` for this name with the quoted nil guid
    pub fn nil_create_of(&self, name: &str) {
        self.nil_create.lock().unwrap().insert(name.to_string());
    }

    /// Answer `POST spaces` for this name with a 500
    pub fn reject_create_of(&self, name: &str) {
        self.reject_create.lock().unwrap().insert(name.to_string());
    }

    /// Answer `POST spaces` for this name with a body that is not a guid
    pub fn garble_create_of(&self, name: &str) {
        self.garbage_create.lock().unwrap().insert(name.to_string());
    }

    pub fn fail_queries(&self) {
        *self.fail_queries.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn creates(&self) -> Vec<SpaceCreate> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Create(req) => Some(req),
                Call::Query(_) => None,
            })
            .collect()
    }

    pub fn queries(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Query(filter) => Some(filter),
                Call::Create(_) => None,
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn space(&self, id: Uuid) -> Option<Space> {
        self.spaces
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    pub fn space_count(&self) -> usize {
        self.spaces.lock().unwrap().len()
    }

    fn allocate_id(&self) -> Uuid {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        Uuid::from_u128(*next)
    }
}

#[async_trait]
impl TwinApi for FakeTwin {
    async fn query_spaces(&self, filter: &str) -> ApiResult<Vec<Space>> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Query(filter.to_string()));

        if *self.fail_queries.lock().unwrap() {
            return Err(TwinApiError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }

        Ok(self
            .spaces
            .lock()
            .unwrap()
            .iter()
            .filter(|s| space_filter(&s.name, s.parent_space_id) == filter)
            .cloned()
            .collect())
    }

    async fn post_space(&self, request: &SpaceCreate) -> ApiResult<String> {
        self.calls.lock().unwrap().push(Call::Create(request.clone()));

        if self.reject_create.lock().unwrap().contains(&request.name) {
            return Err(TwinApiError::Status {
                status: 500,
                body: "boom".to_string(),
            });
        }
        if self.garbage_create.lock().unwrap().contains(&request.name) {
            return Ok("\"not-a-guid\"".to_string());
        }
        if self.nil_create.lock().unwrap().contains(&request.name) {
            return Ok(format!("\"{}\"", Uuid::nil()));
        }

        let id = self.seed(&request.name, request.parent_space_id);
        Ok(format!("\"{}\"", id))
    }
}
