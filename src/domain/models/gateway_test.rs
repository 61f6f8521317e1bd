use super::GatewayError;
use super::CONNECTION_ERROR;

#[test]
fn it_hides_transport_causes() {
    let err = GatewayError::Transport("dns failure".to_string());
    assert!(err.is_transport());
    assert_eq!(err.message_or("Failed to register."), CONNECTION_ERROR);
}

#[test]
fn it_prefers_backend_details() {
    let err = GatewayError::Application {
        status: 400,
        detail: Some("Email already registered.".to_string()),
    };
    assert!(!err.is_transport());
    assert_eq!(
        err.message_or("Failed to register."),
        "Email already registered."
    );
}

#[test]
fn it_falls_back_without_details() {
    let err = GatewayError::Application {
        status: 500,
        detail: None,
    };
    assert_eq!(err.message_or("Failed to register."), "Failed to register.");

    let blank = GatewayError::Application {
        status: 500,
        detail: Some("  ".to_string()),
    };
    assert_eq!(blank.message_or("Failed to register."), "Failed to register.");
}
