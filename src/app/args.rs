//! src/app/args.rs
//!
//! Ligne de commande (clap) -> Mode + Reglages.
//!
//! - `-n <nombre> -r <borne>` : génération (Exercises.txt + Answers.txt)
//! - `-e <fichier> -a <fichier>` : correction (Grade.txt)
//! - sinon : aide

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Générateur d’exercices d’arithmétique (naturels et fractions) et correcteur.
#[derive(Parser, Debug)]
#[command(name = "exercices", version)]
pub struct Cli {
    /// Nombre de problèmes à générer.
    #[arg(short = 'n', value_name = "NOMBRE")]
    pub nombre: Option<usize>,

    /// Borne des valeurs : entiers dans [0, r-1], fractions bornées par r (r ≥ 2).
    #[arg(short = 'r', value_name = "BORNE", value_parser = clap::value_parser!(u64).range(2..))]
    pub borne: Option<u64>,

    /// Fichier d’exercices à corriger.
    #[arg(short = 'e', value_name = "FICHIER")]
    pub exercices: Option<PathBuf>,

    /// Fichier de réponses à corriger.
    #[arg(short = 'a', value_name = "FICHIER")]
    pub reponses: Option<PathBuf>,

    /// Graine du générateur aléatoire (lot reproductible).
    #[arg(long, value_name = "GRAINE")]
    pub graine: Option<u64>,

    /// Dossier où écrire Exercises.txt / Answers.txt / Grade.txt.
    #[arg(short = 'o', long, value_name = "DOSSIER", default_value = ".")]
    pub sortie: PathBuf,

    /// Journal plus bavard (-v : info, -vv : debug, -vvv : trace).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Ce que l’on fait, une fois les options lues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Generer { nombre: usize, borne: u64 },
    Corriger { exercices: PathBuf, reponses: PathBuf },
    Aide,
}

/// Réglages communs aux deux modes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub sortie: PathBuf,
    pub graine: Option<u64>,
}

impl Cli {
    /// Génération prioritaire si -n et -r sont présents, puis correction, sinon aide.
    pub fn mode(&self) -> Mode {
        if let (Some(nombre), Some(borne)) = (self.nombre, self.borne) {
            return Mode::Generer { nombre, borne };
        }
        if let (Some(e), Some(a)) = (&self.exercices, &self.reponses) {
            return Mode::Corriger {
                exercices: e.clone(),
                reponses: a.clone(),
            };
        }
        Mode::Aide
    }

    pub fn reglages(&self) -> Reglages {
        Reglages {
            sortie: self.sortie.clone(),
            graine: self.graine,
        }
    }
}
