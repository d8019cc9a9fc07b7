//! Noyau — évaluation (pipeline réel)
//!
//! rogner tête/queue -> passe multiplicative (x ÷, gauche à droite)
//!        -> propagation des signes -> somme finale -> f64
//!
//! Aucune erreur possible : les opérateurs pendants sont rognés, une case
//! illisible vaut 0, et la division par zéro suit l'IEEE 754 (inf / NaN)
//! jusqu'à l'affichage.

use super::jetons::{Jeton, Operateur};

/// Case de travail de l'évaluation.
/// `Morte` = opérateur consommé par la passe multiplicative : la case ne
/// contribue plus rien à la somme finale.
#[derive(Clone, Copy, Debug)]
enum Case {
    Valeur(f64),
    Operateur(Operateur),
    Morte,
}

/// Valeur numérique d'un texte de nombre en cours de saisie.
/// "" (emplacement vide) et "-" (signe sans chiffre) valent 0.
fn valeur_nombre(texte: &str) -> f64 {
    texte.parse::<f64>().unwrap_or(0.0)
}

/// Évalue la séquence complète.
///
/// La séquence alterne Nombre/Operateur par construction, mais peut se
/// terminer (ou, si elle est construite à la main, commencer) par un
/// opérateur pendant.
pub fn evaluer(jetons: &[Jeton]) -> f64 {
    let mut jetons = jetons;

    // 1) rogner l'opérateur de tête (sauf le moins, qui signe le premier nombre)
    if let Some(Jeton::Operateur(op)) = jetons.first() {
        if *op != Operateur::Moins {
            jetons = &jetons[1..];
        }
    }

    // 2) rogner l'opérateur de queue (saisie incomplète, pas une erreur)
    if let Some(Jeton::Operateur(_)) = jetons.last() {
        jetons = &jetons[..jetons.len() - 1];
    }

    let mut cases: Vec<Case> = jetons
        .iter()
        .map(|j| match j {
            Jeton::Nombre(t) => Case::Valeur(valeur_nombre(t)),
            Jeton::Operateur(op) => Case::Operateur(*op),
        })
        .collect();

    // 3) passe multiplicative : chaque x / ÷ écrit son résultat dans ses deux
    //    cases voisines, meurt, et marque la voisine de gauche "déjà comptée".
    //    Un seul balayage gauche -> droite : les chaînes a x b ÷ c se replient
    //    au fil de l'eau (associativité gauche).
    let mut deja_comptees: Vec<usize> = Vec::new();
    for i in 0..cases.len() {
        let op = match cases[i] {
            Case::Operateur(op @ (Operateur::Fois | Operateur::Division)) => op,
            _ => continue,
        };
        let gauche = match i.checked_sub(1).map(|g| cases[g]) {
            Some(Case::Valeur(v)) => v,
            _ => continue,
        };
        let droite = match cases.get(i + 1) {
            Some(Case::Valeur(v)) => *v,
            _ => continue,
        };

        let resultat = match op {
            Operateur::Fois => gauche * droite,
            _ => gauche / droite,
        };

        cases[i - 1] = Case::Valeur(resultat);
        cases[i + 1] = Case::Valeur(resultat);
        cases[i] = Case::Morte;
        deja_comptees.push(i - 1);
    }

    // 4) propagation des signes : chaque moins nie la valeur qui le suit
    for i in 0..cases.len() {
        if let Case::Operateur(Operateur::Moins) = cases[i] {
            if let Some(Case::Valeur(v)) = cases.get(i + 1).copied() {
                cases[i + 1] = Case::Valeur(-v);
            }
        }
    }

    // 5) somme finale, en sautant les cases déjà comptées par la passe
    //    multiplicative (leur valeur vit aussi dans la voisine de droite)
    let mut total = 0.0;
    for (i, case) in cases.iter().enumerate() {
        if let Case::Valeur(v) = case {
            if !deja_comptees.contains(&i) {
                total += v;
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::super::jetons::{Jeton, Operateur};
    use super::evaluer;

    fn n(t: &str) -> Jeton {
        Jeton::Nombre(t.to_string())
    }

    fn op(o: Operateur) -> Jeton {
        Jeton::Operateur(o)
    }

    #[test]
    fn addition_simple() {
        assert_eq!(evaluer(&[n("5"), op(Operateur::Plus), n("3")]), 8.0);
    }

    #[test]
    fn soustraction_simple() {
        assert_eq!(evaluer(&[n("9"), op(Operateur::Moins), n("3")]), 6.0);
    }

    #[test]
    fn multiplication_avant_addition() {
        // 5 + 3 x 2 = 5 + 6
        let jetons = [
            n("5"),
            op(Operateur::Plus),
            n("3"),
            op(Operateur::Fois),
            n("2"),
        ];
        assert_eq!(evaluer(&jetons), 11.0);
    }

    #[test]
    fn divisions_en_chaine_gauche_a_droite() {
        // (6 ÷ 2) ÷ 3, pas 6 ÷ (2 ÷ 3)
        let jetons = [
            n("6"),
            op(Operateur::Division),
            n("2"),
            op(Operateur::Division),
            n("3"),
        ];
        assert_eq!(evaluer(&jetons), 1.0);
    }

    #[test]
    fn chaine_mixte_fois_puis_division() {
        // (4 x 6) ÷ 8
        let jetons = [
            n("4"),
            op(Operateur::Fois),
            n("6"),
            op(Operateur::Division),
            n("8"),
        ];
        assert_eq!(evaluer(&jetons), 3.0);
    }

    #[test]
    fn signe_dans_le_premier_nombre() {
        assert_eq!(evaluer(&[n("-4"), op(Operateur::Plus), n("7")]), 3.0);
    }

    #[test]
    fn moins_operateur_de_tete_conserve() {
        // séquence construite à la main, comme l'ancienne représentation plate
        let jetons = [op(Operateur::Moins), n("4"), op(Operateur::Plus), n("7")];
        assert_eq!(evaluer(&jetons), 3.0);
    }

    #[test]
    fn operateur_de_tete_rogne() {
        let jetons = [op(Operateur::Fois), n("5"), op(Operateur::Plus), n("2")];
        assert_eq!(evaluer(&jetons), 7.0);
    }

    #[test]
    fn operateur_de_queue_rogne() {
        assert_eq!(evaluer(&[n("5"), op(Operateur::Plus)]), 5.0);
        assert_eq!(evaluer(&[n("5"), op(Operateur::Fois)]), 5.0);
    }

    #[test]
    fn nombre_seul_inchange() {
        assert_eq!(evaluer(&[n("42.5")]), 42.5);
    }

    #[test]
    fn emplacement_vide_vaut_zero() {
        assert_eq!(evaluer(&[n("")]), 0.0);
    }

    #[test]
    fn division_par_zero_suit_ieee() {
        let jetons = [n("8"), op(Operateur::Division), n("0")];
        assert_eq!(evaluer(&jetons), f64::INFINITY);

        let jetons = [n("0"), op(Operateur::Division), n("0")];
        assert!(evaluer(&jetons).is_nan());
    }

    #[test]
    fn decimales() {
        let jetons = [n("5.5"), op(Operateur::Plus), n("4.5")];
        assert_eq!(evaluer(&jetons), 10.0);
    }
}
