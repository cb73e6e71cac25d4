//! Static UI strings for the three supported languages.

use client::preferences::{Language, ThemeMode};

#[derive(Debug)]
pub struct Strings {
    pub app_name: &'static str,
    pub home: &'static str,
    pub profile: &'static str,
    pub preferences: &'static str,
    pub signout: &'static str,
    pub language: &'static str,
    pub language_desc: &'static str,
    pub appearance: &'static str,
    pub appearance_desc: &'static str,
    pub theme: &'static str,
    pub theme_hint: &'static str,
    pub theme_light: &'static str,
    pub theme_dark: &'static str,
    pub theme_system: &'static str,
    pub save: &'static str,
    pub account: &'static str,
    pub account_desc: &'static str,
    pub action_receive: &'static str,
    pub action_deliver: &'static str,
    pub action_edit: &'static str,
    pub action_status: &'static str,
    pub receive_title: &'static str,
    pub receive_desc: &'static str,
    pub deliver_title: &'static str,
    pub deliver_desc: &'static str,
    pub edit_title: &'static str,
    pub edit_desc: &'static str,
    pub status_title: &'static str,
    pub status_desc: &'static str,
    pub coming_soon: &'static str,
    pub stock: &'static str,
    pub stock_title: &'static str,
    pub stock_desc: &'static str,
    pub stock_add: &'static str,
    pub stock_form_title: &'static str,
    pub stock_form_desc: &'static str,
    pub stock_form_description: &'static str,
    pub stock_form_price: &'static str,
    pub stock_form_submit: &'static str,
    pub stock_adjust: &'static str,
    pub stock_adjust_desc: &'static str,
    pub stock_adjust_submit: &'static str,
    pub stock_empty: &'static str,
    pub product: &'static str,
    pub quantity: &'static str,
    pub direction_add: &'static str,
    pub direction_subtract: &'static str,
    pub col_item: &'static str,
    pub col_available: &'static str,
    pub col_status: &'static str,
    pub col_updated: &'static str,
    pub pending_orders: &'static str,
    pub no_pending: &'static str,
    pub today: &'static str,
    pub login_title: &'static str,
    pub register_title: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub sign_in: &'static str,
    pub register_submit: &'static str,
    pub switch_to_register: &'static str,
    pub switch_to_login: &'static str,
}

impl Strings {
    pub fn theme_label(&self, theme: ThemeMode) -> &'static str {
        match theme {
            ThemeMode::Light => self.theme_light,
            ThemeMode::Dark => self.theme_dark,
            ThemeMode::System => self.theme_system,
        }
    }
}

/// Endonym shown in the language picker, identical in every locale.
pub fn language_name(language: Language) -> &'static str {
    match language {
        Language::En => "English",
        Language::Es => "Español",
        Language::Fr => "Français",
    }
}

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
        Language::Fr => &FR,
    }
}

static EN: Strings = Strings {
    app_name: "Laundry",
    home: "Home",
    profile: "Profile",
    preferences: "Preferences",
    signout: "Sign out",
    language: "Language",
    language_desc: "Select the language for the entire site.",
    appearance: "Appearance",
    appearance_desc: "Choose how the app looks.",
    theme: "Theme",
    theme_hint: "Persists on this device.",
    theme_light: "Light",
    theme_dark: "Dark",
    theme_system: "System",
    save: "Save",
    account: "Account",
    account_desc: "Basic profile information.",
    action_receive: "Receive",
    action_deliver: "Deliver",
    action_edit: "Edit",
    action_status: "Status",
    receive_title: "Receive Order",
    receive_desc: "Check in a new order and add basic details.",
    deliver_title: "Deliver Order",
    deliver_desc: "Mark an order as picked up or delivered.",
    edit_title: "Edit Order",
    edit_desc: "Find and modify order information.",
    status_title: "Order Status",
    status_desc: "Update the current state of an order.",
    coming_soon: "Coming soon.",
    stock: "Stock",
    stock_title: "Stock & Inventory",
    stock_desc: "Quick snapshot of core SKUs and quantities.",
    stock_add: "Add product",
    stock_form_title: "New product",
    stock_form_desc: "Create a product type and set a unit price.",
    stock_form_description: "Description",
    stock_form_price: "Price",
    stock_form_submit: "Create",
    stock_adjust: "Adjust quantity",
    stock_adjust_desc: "Add received units or subtract used ones.",
    stock_adjust_submit: "Apply",
    stock_empty: "No stock rows yet.",
    product: "Product",
    quantity: "Quantity",
    direction_add: "Add",
    direction_subtract: "Subtract",
    col_item: "Item",
    col_available: "Available",
    col_status: "Status",
    col_updated: "Updated",
    pending_orders: "Pending orders",
    no_pending: "Nothing pending.",
    today: "Today",
    login_title: "Sign in",
    register_title: "Create account",
    username: "Username",
    password: "Password",
    sign_in: "Sign in",
    register_submit: "Register",
    switch_to_register: "Need an account? Register",
    switch_to_login: "Already registered? Sign in",
};

static ES: Strings = Strings {
    app_name: "Lavandería",
    home: "Inicio",
    profile: "Perfil",
    preferences: "Preferencias",
    signout: "Cerrar sesión",
    language: "Idioma",
    language_desc: "Selecciona el idioma de todo el sitio.",
    appearance: "Apariencia",
    appearance_desc: "Elige cómo se ve la aplicación.",
    theme: "Tema",
    theme_hint: "Persiste en este dispositivo.",
    theme_light: "Claro",
    theme_dark: "Oscuro",
    theme_system: "Sistema",
    save: "Guardar",
    account: "Cuenta",
    account_desc: "Información básica del perfil.",
    action_receive: "Recibir",
    action_deliver: "Entregar",
    action_edit: "Editar",
    action_status: "Estado",
    receive_title: "Recibir orden",
    receive_desc: "Registrar una nueva orden y agregar datos básicos.",
    deliver_title: "Entregar orden",
    deliver_desc: "Marcar una orden como retirada o entregada.",
    edit_title: "Editar orden",
    edit_desc: "Buscar y modificar información de la orden.",
    status_title: "Estado de la orden",
    status_desc: "Actualizar el estado actual de una orden.",
    coming_soon: "Próximamente.",
    stock: "Stock",
    stock_title: "Stock e Inventario",
    stock_desc: "Vista rápida de SKUs principales y cantidades.",
    stock_add: "Agregar producto",
    stock_form_title: "Nuevo producto",
    stock_form_desc: "Crea un tipo de producto y define su precio unitario.",
    stock_form_description: "Descripción",
    stock_form_price: "Precio",
    stock_form_submit: "Crear",
    stock_adjust: "Ajustar cantidad",
    stock_adjust_desc: "Suma unidades recibidas o resta las usadas.",
    stock_adjust_submit: "Aplicar",
    stock_empty: "Todavía no hay stock.",
    product: "Producto",
    quantity: "Cantidad",
    direction_add: "Sumar",
    direction_subtract: "Restar",
    col_item: "Artículo",
    col_available: "Disponible",
    col_status: "Estado",
    col_updated: "Actualizado",
    pending_orders: "Órdenes pendientes",
    no_pending: "Nada pendiente.",
    today: "Hoy",
    login_title: "Iniciar sesión",
    register_title: "Crear cuenta",
    username: "Usuario",
    password: "Contraseña",
    sign_in: "Ingresar",
    register_submit: "Registrarse",
    switch_to_register: "¿No tienes cuenta? Regístrate",
    switch_to_login: "¿Ya tienes cuenta? Ingresa",
};

static FR: Strings = Strings {
    app_name: "Blanchisserie",
    home: "Accueil",
    profile: "Profil",
    preferences: "Préférences",
    signout: "Se déconnecter",
    language: "Langue",
    language_desc: "Sélectionnez la langue du site.",
    appearance: "Apparence",
    appearance_desc: "Choisissez l'apparence de l'application.",
    theme: "Thème",
    theme_hint: "Persiste sur cet appareil.",
    theme_light: "Clair",
    theme_dark: "Sombre",
    theme_system: "Système",
    save: "Enregistrer",
    account: "Compte",
    account_desc: "Informations de profil basiques.",
    action_receive: "Réception",
    action_deliver: "Remise",
    action_edit: "Éditer",
    action_status: "Statut",
    receive_title: "Recevoir une commande",
    receive_desc: "Enregistrer une nouvelle commande et les détails de base.",
    deliver_title: "Remettre la commande",
    deliver_desc: "Marquer une commande comme retirée ou livrée.",
    edit_title: "Modifier la commande",
    edit_desc: "Rechercher et modifier les informations de la commande.",
    status_title: "Statut de la commande",
    status_desc: "Mettre à jour l'état actuel d'une commande.",
    coming_soon: "Bientôt disponible.",
    stock: "Stock",
    stock_title: "Stock et Inventaire",
    stock_desc: "Instantané des principaux SKU et quantités.",
    stock_add: "Ajouter un produit",
    stock_form_title: "Nouveau produit",
    stock_form_desc: "Créez un type de produit et définissez son prix unitaire.",
    stock_form_description: "Description",
    stock_form_price: "Prix",
    stock_form_submit: "Créer",
    stock_adjust: "Ajuster la quantité",
    stock_adjust_desc: "Ajoutez les unités reçues ou retirez celles utilisées.",
    stock_adjust_submit: "Appliquer",
    stock_empty: "Aucun stock pour l'instant.",
    product: "Produit",
    quantity: "Quantité",
    direction_add: "Ajouter",
    direction_subtract: "Retirer",
    col_item: "Article",
    col_available: "Disponible",
    col_status: "Statut",
    col_updated: "Mis à jour",
    pending_orders: "Commandes en attente",
    no_pending: "Rien en attente.",
    today: "Aujourd'hui",
    login_title: "Connexion",
    register_title: "Créer un compte",
    username: "Nom d'utilisateur",
    password: "Mot de passe",
    sign_in: "Se connecter",
    register_submit: "S'inscrire",
    switch_to_register: "Pas de compte ? Inscrivez-vous",
    switch_to_login: "Déjà inscrit ? Connectez-vous",
};
