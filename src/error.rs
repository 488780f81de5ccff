// Copyright (c) 2024-2025  EcoSwitch Lite authors

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/*!
Erreurs
=======

Erreurs de chargement et de validation des données d'entrée.

Load and validation errors. The simulation engine itself never fails: numeric
degeneracies are recovered locally and only malformed inputs end up here.
*/

use std::fmt;

/// Erreur de la bibliothèque
///
/// Library error
#[derive(Debug)]
pub enum EcoError {
    /// Erreur de lecture ou d'écriture de fichier
    Io(std::io::Error),
    /// Texte qui n'a pas pu être interprété
    ParseError(String),
    /// Donnée d'entrée hors plage ou incohérente
    WrongInput(String),
    /// Colonne absente d'un fichier tabulaire
    MissingColumn(String),
    /// Couleur tempo absente de la table tarifaire
    ColorUnknown(String),
}

impl fmt::Display for EcoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EcoError::*;
        match self {
            Io(err) => write!(f, "Erreur d'entrée/sortie : {}", err),
            ParseError(s) => write!(f, "Erreur de lecture des données : {}", s),
            WrongInput(s) => write!(f, "Donnée d'entrée incorrecte : {}", s),
            MissingColumn(s) => write!(f, "Colonne \"{}\" introuvable", s),
            ColorUnknown(s) => write!(f, "Couleur tempo \"{}\" inconnue", s),
        }
    }
}

impl std::error::Error for EcoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EcoError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Résultat des opérations de la bibliothèque
pub type Result<T> = std::result::Result<T, EcoError>;

impl From<std::io::Error> for EcoError {
    fn from(err: std::io::Error) -> Self {
        EcoError::Io(err)
    }
}

impl From<std::num::ParseFloatError> for EcoError {
    fn from(err: std::num::ParseFloatError) -> Self {
        EcoError::ParseError(format!("nombre incorrect ({})", err))
    }
}

impl From<serde_json::Error> for EcoError {
    fn from(err: serde_json::Error) -> Self {
        EcoError::ParseError(format!("JSON ({})", err))
    }
}

impl From<csv::Error> for EcoError {
    fn from(err: csv::Error) -> Self {
        EcoError::ParseError(format!("CSV ({})", err))
    }
}

impl From<chrono::ParseError> for EcoError {
    fn from(err: chrono::ParseError) -> Self {
        EcoError::ParseError(format!("date ({})", err))
    }
}
