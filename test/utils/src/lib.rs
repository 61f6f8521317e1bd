pub fn professionals_fixture() -> &'static str {
    return r#"
[
  { "id": 1, "name": "Carlos O Barbeiro", "specialty": "Classic cuts and beard" },
  { "id": 2, "name": "Ana Estilista", "specialty": "Colouring" }
]
"#
    .trim();
}

pub fn services_fixture() -> &'static str {
    return r#"
[
  { "id": 1, "name": "Men's cut", "description": "Classic men's haircut.", "duration_minutes": 45, "price": 50.0 },
  { "id": 2, "name": "Full beard", "description": null, "duration_minutes": 30, "price": 40.5 }
]
"#
    .trim();
}

/// Three appointments for user 1, deliberately out of chronological order.
pub fn appointments_fixture() -> &'static str {
    return r#"
[
  {
    "id": 3,
    "user_id": 1,
    "professional_id": 2,
    "service_id": 1,
    "start_time": "2031-05-03T15:00:00Z",
    "end_time": "2031-05-03T15:45:00Z",
    "status": "Agendado"
  },
  {
    "id": 1,
    "user_id": 1,
    "professional_id": 1,
    "service_id": 2,
    "start_time": "2031-05-01T09:00:00Z",
    "end_time": "2031-05-01T09:30:00Z",
    "status": "Cancelado"
  },
  {
    "id": 2,
    "user_id": 1,
    "professional_id": 9,
    "service_id": 1,
    "start_time": "2031-05-02T10:00:00Z",
    "end_time": "2031-05-02T10:45:00Z",
    "status": "Concluído"
  }
]
"#
    .trim();
}
