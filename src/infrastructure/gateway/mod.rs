pub mod rest;

use crate::domain::models::GatewayBox;

pub struct GatewayManager {}

impl GatewayManager {
    pub fn get() -> GatewayBox {
        return Box::<rest::RestGateway>::default();
    }
}
