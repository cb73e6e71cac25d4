//! Askama page models. Every page embeds a [`PageChrome`] read by `base.html`.

use crate::i18n::{Strings, strings};
use askama::Template;
use client::{
    dashboard::DayCard,
    flow::{AdjustmentDialog, ProductDialog},
    preferences::Preferences,
};

pub struct PageChrome {
    pub lang: &'static str,
    pub theme: &'static str,
    pub dark: bool,
    pub t: &'static Strings,
    pub title: &'static str,
    pub nav: bool,
}

impl PageChrome {
    pub fn new(prefs: &Preferences, title: fn(&'static Strings) -> &'static str) -> Self {
        let t = strings(prefs.language);

        Self {
            lang: prefs.language.code(),
            theme: prefs.theme.as_str(),
            dark: prefs.is_dark(),
            t,
            title: title(t),
            nav: true,
        }
    }

    pub fn without_nav(mut self) -> Self {
        self.nav = false;
        self
    }
}

pub struct GoogleSignIn {
    pub client_id: String,
    /// Absolute URL Google posts the credential to.
    pub login_uri: String,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub page: PageChrome,
    pub register: bool,
    pub username: String,
    pub error: Option<String>,
    pub google: Option<GoogleSignIn>,
}

pub struct ActionLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageChrome,
    pub cards: Vec<DayCard>,
    pub actions: Vec<ActionLink>,
}

pub struct StockRowView {
    pub description: String,
    pub available: i64,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub updated_at: String,
}

pub struct ProductOption {
    pub id: i64,
    pub label: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "stock.html")]
pub struct StockTemplate {
    pub page: PageChrome,
    pub load_error: Option<String>,
    pub rows: Vec<StockRowView>,
    pub products: Vec<ProductOption>,
    pub product_dialog: ProductDialog,
    pub adjustment_dialog: AdjustmentDialog,
    pub subtracting: bool,
}

#[derive(Template)]
#[template(path = "placeholder.html")]
pub struct PlaceholderTemplate {
    pub page: PageChrome,
    pub description: &'static str,
}

pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "preferences.html")]
pub struct PreferencesTemplate {
    pub page: PageChrome,
    pub languages: Vec<Choice>,
    pub themes: Vec<Choice>,
}
