//! Verb ids of the standard catalog.
//!
//! Applications declare further verbs for their own domain; these are the
//! ones every host is expected to offer.

pub struct ThemeVerbs {
    pub get: &'static str,
    pub set: &'static str,
}

pub const THEME_VERBS: ThemeVerbs = ThemeVerbs {
    get: "ui.theme.get",
    set: "ui.theme.set",
};

pub struct NavVerbs {
    pub list_pages: &'static str,
    pub go: &'static str,
    pub back: &'static str,
}

pub const NAV_VERBS: NavVerbs = NavVerbs {
    list_pages: "ui.nav.list_pages",
    go: "ui.nav.go",
    back: "ui.nav.back",
};

pub struct SearchVerbs {
    pub query: &'static str,
    pub open_result: &'static str,
}

pub const SEARCH_VERBS: SearchVerbs = SearchVerbs {
    query: "ui.search.query",
    open_result: "ui.search.open_result",
};

pub struct ToastVerbs {
    pub show: &'static str,
    pub dismiss: &'static str,
}

pub const TOAST_VERBS: ToastVerbs = ToastVerbs {
    show: "ui.toast.show",
    dismiss: "ui.toast.dismiss",
};

pub struct ModalVerbs {
    pub open: &'static str,
    pub close: &'static str,
    pub list: &'static str,
}

pub const MODAL_VERBS: ModalVerbs = ModalVerbs {
    open: "ui.modal.open",
    close: "ui.modal.close",
    list: "ui.modal.list",
};

pub struct FormVerbs {
    pub list: &'static str,
    pub fill: &'static str,
    pub submit: &'static str,
    pub reset: &'static str,
}

pub const FORM_VERBS: FormVerbs = FormVerbs {
    list: "ui.form.list",
    fill: "ui.form.fill",
    submit: "ui.form.submit",
    reset: "ui.form.reset",
};

pub struct SessionVerbs {
    pub get: &'static str,
    pub logout: &'static str,
    pub get_preferences: &'static str,
}

pub const SESSION_VERBS: SessionVerbs = SessionVerbs {
    get: "user.session.get",
    logout: "user.session.logout",
    get_preferences: "user.session.get_preferences",
};

/// All 19 standard verb ids.
pub const ALL_VERB_IDS: [&str; 19] = [
    THEME_VERBS.get,
    THEME_VERBS.set,
    NAV_VERBS.list_pages,
    NAV_VERBS.go,
    NAV_VERBS.back,
    SEARCH_VERBS.query,
    SEARCH_VERBS.open_result,
    TOAST_VERBS.show,
    TOAST_VERBS.dismiss,
    MODAL_VERBS.open,
    MODAL_VERBS.close,
    MODAL_VERBS.list,
    FORM_VERBS.list,
    FORM_VERBS.fill,
    FORM_VERBS.submit,
    FORM_VERBS.reset,
    SESSION_VERBS.get,
    SESSION_VERBS.logout,
    SESSION_VERBS.get_preferences,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestRegistry;

    #[test]
    fn all_verb_ids_match_the_catalog() {
        let registry = ManifestRegistry::standard().expect("catalog");
        let mut actual: Vec<&str> = registry.all_verbs().map(|verb| verb.id.as_str()).collect();
        let mut constants = ALL_VERB_IDS.to_vec();
        actual.sort_unstable();
        constants.sort_unstable();
        assert_eq!(constants, actual);
    }
}
