#[cfg(test)]
#[path = "reference_cache_test.rs"]
mod tests;

use crate::domain::models::Professional;
use crate::domain::models::Service;

/// Professionals and services for the lifetime of one page. Collections are
/// only ever replaced wholesale by a successful fetch.
#[derive(Default)]
pub struct ReferenceCache {
    professionals: Vec<Professional>,
    services: Vec<Service>,
}

impl ReferenceCache {
    pub fn professionals(&self) -> &[Professional] {
        return &self.professionals;
    }

    pub fn services(&self) -> &[Service] {
        return &self.services;
    }

    pub fn replace_professionals(&mut self, professionals: Vec<Professional>) {
        self.professionals = professionals;
    }

    pub fn replace_services(&mut self, services: Vec<Service>) {
        self.services = services;
    }

    pub fn professional(&self, id: i64) -> Option<&Professional> {
        return self
            .professionals
            .iter()
            .find(|professional| return professional.id == id);
    }

    pub fn service(&self, id: i64) -> Option<&Service> {
        return self.services.iter().find(|service| return service.id == id);
    }
}
