//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de l’écran (entrée, mode numérique, valeur, erreur, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

/// Type numérique utilisé pour le calcul.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Reel,
    Entier,
    Exact,
}

impl Mode {
    pub const TOUS: [Mode; 3] = [Mode::Reel, Mode::Entier, Mode::Exact];

    pub fn libelle(self) -> &'static str {
        match self {
            Mode::Reel => "réel (f64)",
            Mode::Entier => "entier (i64)",
            Mode::Exact => "exact (rationnel)",
        }
    }
}

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub parentheses: String,
    pub postfixe: String,
}

#[derive(Clone, Debug)]
pub struct AppFormule {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub valeur: String,
    pub erreur: String,
    pub erreurs_parentheses: usize,

    // --- démarche (rapport + forme postfixée) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub mode: Mode,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppFormule {
    fn default() -> Self {
        Self {
            entree: String::new(),
            valeur: String::new(),
            erreur: String::new(),
            erreurs_parentheses: 0,
            demarche: Demarche::default(),
            mode: Mode::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppFormule {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + mode par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.mode = Mode::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.valeur.clear();
        self.erreur.clear();
        self.erreurs_parentheses = 0;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Place une erreur.
    ///
    /// On CONSERVE `valeur` (dernier résultat) pour ne pas “effacer l’écran” sur une faute;
    /// la démarche fournie remplace l’ancienne (le rapport de parenthèses reste utile).
    pub fn set_erreur(&mut self, msg: impl Into<String>, demarche: Demarche) {
        self.erreur = msg.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Dépose un résultat complet (valeur + démarche).
    pub fn set_resultats(
        &mut self,
        valeur: impl Into<String>,
        erreurs_parentheses: usize,
        demarche: Demarche,
    ) {
        self.erreur.clear();
        self.valeur = valeur.into();
        self.erreurs_parentheses = erreurs_parentheses;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Changer de mode invalide le dernier résultat (calculé dans un autre type).
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.clear_resultats();
        }
        self.focus_entree = true;
    }
}
