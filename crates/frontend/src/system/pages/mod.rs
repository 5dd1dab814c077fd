pub mod login;
pub mod register;
pub mod welcome;

/// Экран для пользователя без сессии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScreen {
    #[default]
    Welcome,
    Login,
    Register,
}
