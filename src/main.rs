// src/main.rs
//
// Exercices Q-pur — point d’entrée (ligne de commande)
// ----------------------------------------------------
// - `-n <nombre> -r <borne>`    : Exercises.txt + Answers.txt
// - `-e <fichier> -a <fichier>` : Grade.txt
// - sinon                       : aide
//
// Frontière d’erreurs : anyhow ici, erreurs typées dans le noyau et l’app.

use std::process;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use exercices_qpur::app::args::{Cli, Mode};
use exercices_qpur::app::{journal, lancer_correction, lancer_generation};

fn main() {
    if let Err(err) = run() {
        eprintln!("Erreur : {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    journal::initialiser(cli.verbose);

    let reglages = cli.reglages();

    match cli.mode() {
        Mode::Generer { nombre, borne } => lancer_generation(nombre, borne, &reglages),
        Mode::Corriger {
            exercices,
            reponses,
        } => lancer_correction(&exercices, &reponses, &reglages),
        Mode::Aide => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
