//! Tests de séquences : on rejoue des suites de touches comme l'hôte le
//! fait (étiquette par étiquette, via la frontière), et on vérifie
//! l'affichage obtenu.

use super::expression::Expression;
use super::touches::Symbole;

fn rejouer(etiquettes: &[&str]) -> Expression {
    let mut e = Expression::default();
    for etiquette in etiquettes {
        let symbole = Symbole::depuis_etiquette(etiquette)
            .unwrap_or_else(|msg| panic!("étiquette invalide dans le test: {msg}"));
        e = e.appliquer(symbole);
    }
    e
}

fn affiche(etiquettes: &[&str]) -> String {
    rejouer(etiquettes).affichage().to_string()
}

// --- Saisie ---

#[test]
fn chiffres_concatenes() {
    assert_eq!(affiche(&["1", "2", "3"]), "123");
}

#[test]
fn saisie_decimale() {
    assert_eq!(affiche(&["1", ".", "5"]), "1.5");
}

#[test]
fn second_point_ignore() {
    assert_eq!(affiche(&["1", ".", ".", "5"]), "1.5");
}

#[test]
fn point_seul_sur_etat_frais_ignore() {
    assert_eq!(affiche(&["."]), "");
}

#[test]
fn operateur_seul_sur_etat_frais_ignore() {
    assert_eq!(affiche(&["x"]), "");
    assert_eq!(affiche(&["÷", "5"]), "5");
}

// --- Évaluation ---

#[test]
fn addition() {
    assert_eq!(affiche(&["5", "+", "3", "="]), "8");
}

#[test]
fn multiplication_prioritaire() {
    // 5 + (3 x 2)
    assert_eq!(affiche(&["5", "+", "3", "x", "2", "="]), "11");
}

#[test]
fn divisions_en_chaine() {
    // (6 ÷ 2) ÷ 3
    assert_eq!(affiche(&["6", "÷", "2", "÷", "3", "="]), "1");
}

#[test]
fn moins_unaire_sur_le_premier_operande() {
    assert_eq!(affiche(&["-", "4", "+", "7", "="]), "3");
}

#[test]
fn remplacement_d_operateur_puis_evaluation() {
    assert_eq!(affiche(&["9", "+", "x"]), "9x");
    assert_eq!(affiche(&["9", "+", "x", "2", "="]), "18");
}

#[test]
fn operateur_de_queue_pendant_ignore() {
    assert_eq!(affiche(&["5", "x", "="]), "5");
}

#[test]
fn decimales_qui_s_annulent() {
    assert_eq!(affiche(&["5", ".", "5", "+", "4", ".", "5", "="]), "10");
}

#[test]
fn egal_sur_etat_frais_vaut_zero() {
    assert_eq!(affiche(&["="]), "0");
}

#[test]
fn egal_sur_nombre_seul_inchange() {
    assert_eq!(affiche(&["4", "2", "="]), "42");
}

#[test]
fn division_par_zero_affichee_telle_quelle() {
    assert_eq!(affiche(&["8", "÷", "0", "="]), "inf");
    assert_eq!(affiche(&["0", "÷", "0", "="]), "NaN");
}

// --- Après "=" ---

#[test]
fn la_saisie_continue_sur_le_resultat() {
    // 1 + 1 = 2, puis "0" étend le résultat en 20
    assert_eq!(affiche(&["1", "+", "1", "=", "0", "="]), "20");
}

#[test]
fn operateur_apres_egal_enchaine_le_calcul() {
    assert_eq!(affiche(&["5", "+", "3", "=", "x", "2", "="]), "16");
}

#[test]
fn egal_repete_stable() {
    assert_eq!(affiche(&["5", "+", "3", "=", "="]), "8");
}

// --- Remise à zéro ---

#[test]
fn ac_depuis_n_importe_quel_etat() {
    assert_eq!(rejouer(&["5", "+", "3", "AC"]), Expression::default());
    assert_eq!(affiche(&["5", "+", "3", "AC"]), "");
    assert_eq!(rejouer(&["AC"]), Expression::default());
}

#[test]
fn ac_puis_nouvelle_saisie() {
    assert_eq!(affiche(&["9", "9", "AC", "3", "+", "4", "="]), "7");
}

// --- Alias clavier ---

#[test]
fn alias_de_multiplication_et_division() {
    assert_eq!(affiche(&["5", "*", "2", "="]), "10");
    assert_eq!(affiche(&["5", "×", "2", "="]), "10");
    assert_eq!(affiche(&["8", "/", "2", "="]), "4");
}

#[test]
fn l_alias_s_affiche_avec_le_glyphe_du_pave() {
    // "*" tape l'opérateur x : l'affichage montre "x"
    assert_eq!(affiche(&["5", "*", "2"]), "5x2");
}
