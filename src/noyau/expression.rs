// src/noyau/expression.rs
//
// État de l'expression en cours de saisie.
//
// Contrats :
// - appliquer() est pure : chaque touche produit une NOUVELLE Expression,
//   l'hôte garde la dernière valeur et jette l'ancienne.
// - appliquer() n'échoue jamais : une touche hors séquence est ignorée,
//   un opérateur tapé deux fois remplace l'opérateur en attente.
// - `affichage` reste égal à la concaténation des textes de jetons
//   (c'est un cache, pas un état indépendant).

use super::eval::evaluer;
use super::format::format_valeur;
use super::jetons::{Jeton, Operateur};
use super::touches::Symbole;

/// Séquence de jetons + affichage dérivé.
///
/// L'état frais est l'unique emplacement `Nombre("")` : la séquence n'est
/// jamais vide.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    jetons: Vec<Jeton>,
    affichage: String,
}

impl Default for Expression {
    fn default() -> Self {
        Self {
            jetons: vec![Jeton::Nombre(String::new())],
            affichage: String::new(),
        }
    }
}

impl Expression {
    /// Texte à rendre tel quel par l'hôte.
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    /// Séquence brute, pour les hôtes qui veulent l'état structuré.
    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    /// Opérateur en attente (dernier jeton), pour surligner le bouton actif.
    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        match self.jetons.last() {
            Some(Jeton::Operateur(op)) => Some(*op),
            _ => None,
        }
    }

    /// Applique une touche et retourne le nouvel état.
    pub fn appliquer(&self, symbole: Symbole) -> Expression {
        match symbole {
            Symbole::RemiseAZero => Expression::default(),
            Symbole::Point => self.appliquer_point(),
            Symbole::Chiffre(c) => self.appliquer_chiffre(c),
            Symbole::Operateur(op) => self.appliquer_operateur(op),
            Symbole::Egal => self.evaluer_sequence(),
        }
    }

    /// Point décimal : au plus un par nombre, et jamais sur un emplacement
    /// vide ni sur un opérateur.
    fn appliquer_point(&self) -> Expression {
        match self.jetons.last() {
            Some(Jeton::Nombre(t)) if !t.is_empty() && !t.contains('.') => {
                let mut e = self.clone();
                if let Some(Jeton::Nombre(t)) = e.jetons.last_mut() {
                    t.push('.');
                }
                e.affichage.push('.');
                e
            }
            _ => self.clone(),
        }
    }

    /// Chiffre : étend le nombre en cours, ou ouvre un nouvel emplacement
    /// juste après un opérateur.
    fn appliquer_chiffre(&self, c: char) -> Expression {
        let mut e = self.clone();
        match e.jetons.last_mut() {
            Some(Jeton::Nombre(t)) => t.push(c),
            _ => e.jetons.push(Jeton::Nombre(c.to_string())),
        }
        e.affichage.push(c);
        e
    }

    fn appliquer_operateur(&self, op: Operateur) -> Expression {
        match self.jetons.last() {
            // Changement d'avis : l'opérateur en attente est remplacé.
            Some(Jeton::Operateur(_)) => {
                let mut e = self.clone();
                if let Some(Jeton::Operateur(o)) = e.jetons.last_mut() {
                    *o = op;
                }
                e.affichage.pop();
                e.affichage.push(op.glyphe());
                e
            }
            // Premier symbole : un moins devient le signe du premier nombre,
            // les autres opérateurs n'ont rien à opérer.
            Some(Jeton::Nombre(t)) if t.is_empty() => {
                if op == Operateur::Moins {
                    let mut e = self.clone();
                    if let Some(Jeton::Nombre(t)) = e.jetons.last_mut() {
                        t.push('-');
                    }
                    e.affichage.push('-');
                    e
                } else {
                    self.clone()
                }
            }
            // Signe seul, sans chiffre : rien à opérer non plus.
            Some(Jeton::Nombre(t)) if t == "-" => self.clone(),
            // Opérateur après un nombre : nouvel emplacement en attente.
            Some(Jeton::Nombre(_)) => {
                let mut e = self.clone();
                e.jetons.push(Jeton::Operateur(op));
                e.affichage.push(op.glyphe());
                e
            }
            None => self.clone(),
        }
    }

    /// "=" : la séquence entière se replie sur un unique jeton `Nombre`
    /// portant le résultat formaté. La saisie continue ensuite sur ce jeton
    /// avec les règles ordinaires.
    fn evaluer_sequence(&self) -> Expression {
        let texte = format_valeur(evaluer(&self.jetons));
        Expression {
            jetons: vec![Jeton::Nombre(texte.clone())],
            affichage: texte,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Expression, Jeton, Operateur, Symbole};

    fn frais() -> Expression {
        Expression::default()
    }

    #[test]
    fn etat_frais_unique_emplacement_vide() {
        let e = frais();
        assert_eq!(e.jetons(), &[Jeton::Nombre(String::new())]);
        assert_eq!(e.affichage(), "");
    }

    #[test]
    fn point_sur_emplacement_vide_ignore() {
        let e = frais().appliquer(Symbole::Point);
        assert_eq!(e, frais());
    }

    #[test]
    fn deux_points_dans_le_meme_nombre() {
        let e = frais()
            .appliquer(Symbole::Chiffre('1'))
            .appliquer(Symbole::Point)
            .appliquer(Symbole::Point);
        assert_eq!(e.jetons(), &[Jeton::Nombre("1.".into())]);
        assert_eq!(e.affichage(), "1.");
    }

    #[test]
    fn point_apres_operateur_ignore() {
        let e = frais()
            .appliquer(Symbole::Chiffre('5'))
            .appliquer(Symbole::Operateur(Operateur::Plus))
            .appliquer(Symbole::Point);
        assert_eq!(e.affichage(), "5+");
        assert_eq!(e.operateur_en_attente(), Some(Operateur::Plus));
    }

    #[test]
    fn moins_de_tete_est_un_signe_pas_un_operateur() {
        let e = frais()
            .appliquer(Symbole::Operateur(Operateur::Moins))
            .appliquer(Symbole::Chiffre('4'));
        assert_eq!(e.jetons(), &[Jeton::Nombre("-4".into())]);
        assert_eq!(e.operateur_en_attente(), None);
    }

    #[test]
    fn operateur_sur_etat_frais_ignore() {
        let e = frais().appliquer(Symbole::Operateur(Operateur::Fois));
        assert_eq!(e, frais());
    }

    #[test]
    fn operateur_sur_signe_seul_ignore() {
        let signe = frais().appliquer(Symbole::Operateur(Operateur::Moins));
        let e = signe.appliquer(Symbole::Operateur(Operateur::Division));
        assert_eq!(e, signe);
    }

    #[test]
    fn remplacement_d_operateur() {
        let e = frais()
            .appliquer(Symbole::Chiffre('9'))
            .appliquer(Symbole::Operateur(Operateur::Plus))
            .appliquer(Symbole::Operateur(Operateur::Fois));
        assert_eq!(
            e.jetons(),
            &[
                Jeton::Nombre("9".into()),
                Jeton::Operateur(Operateur::Fois),
            ]
        );
        assert_eq!(e.affichage(), "9x");
    }

    #[test]
    fn remplacement_du_glyphe_division() {
        // ÷ est multi-octets : le remplacement doit retirer le glyphe entier.
        let e = frais()
            .appliquer(Symbole::Chiffre('8'))
            .appliquer(Symbole::Operateur(Operateur::Division))
            .appliquer(Symbole::Operateur(Operateur::Plus));
        assert_eq!(e.affichage(), "8+");
    }

    #[test]
    fn jamais_deux_operateurs_adjacents() {
        let mut e = frais().appliquer(Symbole::Chiffre('7'));
        for op in [
            Operateur::Plus,
            Operateur::Fois,
            Operateur::Division,
            Operateur::Moins,
        ] {
            e = e.appliquer(Symbole::Operateur(op));
            let operateurs = e
                .jetons()
                .iter()
                .filter(|j| matches!(j, Jeton::Operateur(_)))
                .count();
            assert_eq!(operateurs, 1);
        }
    }

    #[test]
    fn egal_replie_sur_un_seul_jeton() {
        let e = frais()
            .appliquer(Symbole::Chiffre('5'))
            .appliquer(Symbole::Operateur(Operateur::Plus))
            .appliquer(Symbole::Chiffre('3'))
            .appliquer(Symbole::Egal);
        assert_eq!(e.jetons(), &[Jeton::Nombre("8".into())]);
        assert_eq!(e.affichage(), "8");
    }

    #[test]
    fn remise_a_zero_depuis_n_importe_ou() {
        let e = frais()
            .appliquer(Symbole::Chiffre('5'))
            .appliquer(Symbole::Operateur(Operateur::Division))
            .appliquer(Symbole::RemiseAZero);
        assert_eq!(e, frais());
    }
}
