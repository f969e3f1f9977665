mod common;

use account_service::domain::account::errors::AuthError;
use account_service::domain::account::models::ChangePasswordCommand;
use account_service::domain::account::models::EmailAddress;
use account_service::domain::account::models::LoginCommand;
use account_service::domain::account::models::RegisterCommand;
use account_service::domain::account::models::Username;
use account_service::domain::account::ports::AccountServicePort;
use auth::PasswordHasher;
use common::TestHarness;

fn register_command(username: &str, email: &str, password: &str) -> RegisterCommand {
    RegisterCommand::new(
        Username::new(username.to_string()).unwrap(),
        EmailAddress::new(email.to_string()).unwrap(),
        password.to_string(),
    )
}

fn login_command(identifier: &str, password: &str) -> LoginCommand {
    LoginCommand {
        identifier: identifier.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_register_then_login_lifecycle() {
    let harness = TestHarness::new();

    // Register alice
    let account = harness
        .service
        .register(register_command("alice", "a@x.com", "pw1"))
        .await
        .expect("Registration failed");

    assert_eq!(account.role, "user");
    assert!(!account.valid);
    assert!(account.password_hash.starts_with("$argon2"));

    // Register the same username again
    let conflict = harness
        .service
        .register(register_command("alice", "other@x.com", "pw2"))
        .await
        .unwrap_err();

    assert!(matches!(conflict, AuthError::AlreadyRegistered));
    assert_eq!(conflict.to_string(), "Usuario o email ya existen");
    assert_eq!(harness.repository.count().await, 1);

    // Login by email
    let token = harness
        .service
        .login(login_command("a@x.com", "pw1"))
        .await
        .expect("Login failed");

    assert!(!token.is_empty());
    let claims = harness.issuer.validate(&token).expect("Invalid token");
    assert_eq!(claims.sub, account.id.to_string());
    assert_eq!(claims.name, "alice");
    assert_eq!(claims.email, "a@x.com");

    // Login by username with a wrong password
    let rejected = harness
        .service
        .login(login_command("alice", "wrong"))
        .await
        .unwrap_err();

    assert!(matches!(rejected, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_duplicate_email_is_also_a_conflict() {
    let harness = TestHarness::new();

    harness
        .service
        .register(register_command("alice", "a@x.com", "pw1"))
        .await
        .unwrap();

    let conflict = harness
        .service
        .register(register_command("someone-else", "a@x.com", "pw2"))
        .await
        .unwrap_err();

    assert!(matches!(conflict, AuthError::AlreadyRegistered));
    assert_eq!(harness.repository.count().await, 1);
}

#[tokio::test]
async fn test_login_failure_causes_share_one_message() {
    let harness = TestHarness::new();

    harness
        .service
        .register(register_command("alice", "a@x.com", "pw1"))
        .await
        .unwrap();

    let wrong_password = harness
        .service
        .login(login_command("alice", "wrong"))
        .await
        .unwrap_err();

    let unknown_user = harness
        .service
        .login(login_command("mallory", "pw1"))
        .await
        .unwrap_err();

    let unknown_email = harness
        .service
        .login(login_command("mallory@x.com", "pw1"))
        .await
        .unwrap_err();

    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    assert_eq!(
        wrong_password.to_string(),
        "Nombre de usuario/correo o contraseña incorrectos."
    );
}

#[tokio::test]
async fn test_login_empty_identifier_is_rejected_up_front() {
    let harness = TestHarness::new();

    for identifier in ["", "   ", "\t"] {
        let err = harness
            .service
            .login(login_command(identifier, "pw1"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::EmptyIdentifier));
        assert_eq!(
            err.to_string(),
            "El identificador de inicio de sesión no puede estar vacío."
        );
    }
}

#[tokio::test]
async fn test_change_password_rotates_the_stored_digest() {
    let harness = TestHarness::new();
    let hasher = PasswordHasher::new();

    let account = harness
        .service
        .register(register_command("alice", "a@x.com", "old-password"))
        .await
        .unwrap();

    // Wrong current password: refused, digest untouched
    let before = harness.repository.stored_hash(&account.id).await.unwrap();
    let changed = harness
        .service
        .change_password(
            &account.id,
            ChangePasswordCommand {
                current_password: "not-it".to_string(),
                new_password: "new-password".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(!changed);
    assert_eq!(
        harness.repository.stored_hash(&account.id).await.unwrap(),
        before
    );

    // Correct current password: digest rotated
    let changed = harness
        .service
        .change_password(
            &account.id,
            ChangePasswordCommand {
                current_password: "old-password".to_string(),
                new_password: "new-password".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(changed);

    let after = harness.repository.stored_hash(&account.id).await.unwrap();
    assert!(hasher.verify("new-password", &after).unwrap());
    assert!(!hasher.verify("old-password", &after).unwrap());

    // Old credential no longer logs in, the new one does
    assert!(harness
        .service
        .login(login_command("alice", "old-password"))
        .await
        .is_err());
    assert!(harness
        .service
        .login(login_command("alice", "new-password"))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_email_shaped_identifier_is_only_looked_up_as_email() {
    let harness = TestHarness::new();

    harness
        .service
        .register(register_command("alice", "a@x.com", "pw1"))
        .await
        .unwrap();

    // The registered email works; an email-shaped identifier that matches
    // nothing fails like any other bad credential.
    assert!(harness
        .service
        .login(login_command("a@x.com", "pw1"))
        .await
        .is_ok());
    assert!(matches!(
        harness
            .service
            .login(login_command("alice@elsewhere.com", "pw1"))
            .await
            .unwrap_err(),
        AuthError::InvalidCredentials
    ));
}
