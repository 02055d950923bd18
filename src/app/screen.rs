// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration and the transitions between screens.

/// Panels the user can navigate between. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    ForgotPassword,
    Signup,
}

/// Navigation requests raised by the panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// "Forgot your password?" on the login panel.
    ForgotPassword,
    /// "Sign up" on the login panel.
    Signup,
    /// Any way back to the login panel.
    BackToLogin,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Login, Screen::ForgotPassword, Screen::Signup];

    /// Screen shown after `request` is raised while `self` is active.
    ///
    /// Requests a screen cannot raise leave it unchanged.
    #[must_use]
    pub fn navigate(self, request: Navigation) -> Screen {
        match (self, request) {
            (Screen::Login, Navigation::ForgotPassword) => Screen::ForgotPassword,
            (Screen::Login, Navigation::Signup) => Screen::Signup,
            (Screen::ForgotPassword | Screen::Signup, Navigation::BackToLogin) => Screen::Login,
            (current, _) => current,
        }
    }

    /// Whether `self` is the panel shown when `active` is the active screen.
    #[must_use]
    pub fn is_visible(self, active: Screen) -> bool {
        self == active
    }

    /// i18n key of the panel title, reused in the window title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Login => "login-title",
            Screen::ForgotPassword => "forgot-title",
            Screen::Signup => "signup-title",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_count(active: Screen) -> usize {
        Screen::ALL
            .iter()
            .filter(|screen| screen.is_visible(active))
            .count()
    }

    #[test]
    fn initial_screen_is_login() {
        assert_eq!(Screen::default(), Screen::Login);
    }

    #[test]
    fn login_leads_to_forgot_password_and_signup() {
        assert_eq!(
            Screen::Login.navigate(Navigation::ForgotPassword),
            Screen::ForgotPassword
        );
        assert_eq!(Screen::Login.navigate(Navigation::Signup), Screen::Signup);
    }

    #[test]
    fn forgot_password_round_trip() {
        let screen = Screen::Login
            .navigate(Navigation::ForgotPassword)
            .navigate(Navigation::BackToLogin);
        assert_eq!(screen, Screen::Login);
    }

    #[test]
    fn signup_round_trip() {
        let screen = Screen::Login
            .navigate(Navigation::Signup)
            .navigate(Navigation::BackToLogin);
        assert_eq!(screen, Screen::Login);
    }

    #[test]
    fn requests_outside_the_table_keep_current_screen() {
        assert_eq!(Screen::Login.navigate(Navigation::BackToLogin), Screen::Login);
        assert_eq!(
            Screen::Signup.navigate(Navigation::ForgotPassword),
            Screen::Signup
        );
        assert_eq!(
            Screen::ForgotPassword.navigate(Navigation::Signup),
            Screen::ForgotPassword
        );
    }

    #[test]
    fn exactly_one_screen_visible_after_any_sequence() {
        let requests = [
            Navigation::ForgotPassword,
            Navigation::BackToLogin,
            Navigation::Signup,
            Navigation::ForgotPassword,
            Navigation::BackToLogin,
            Navigation::BackToLogin,
            Navigation::Signup,
            Navigation::Signup,
            Navigation::BackToLogin,
        ];

        let mut screen = Screen::default();
        assert_eq!(visible_count(screen), 1);
        for request in requests {
            screen = screen.navigate(request);
            assert_eq!(visible_count(screen), 1);
        }
        assert_eq!(screen, Screen::Login);
    }

    #[test]
    fn every_screen_has_a_title() {
        for screen in Screen::ALL {
            assert!(!screen.title_key().is_empty());
        }
    }
}
