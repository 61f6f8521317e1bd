use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Professional {
    pub id: i64,
    pub name: String,
    pub specialty: String,
}
