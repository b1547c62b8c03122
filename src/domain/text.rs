//! Text generators: letters, printable characters, names, emoji, and
//! passwords.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::error::GenerationResult;
use super::validate::{checked_count, checked_length};

/// Character pool for generated passwords: 52 letters, 10 digits, 10 symbols.
const PASSWORD_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#$%&*-=+?";

/// Name corpus for `/api/NombreAleatorio`; drawn with replacement.
const NAMES: [&str; 40] = [
    "Alejandro", "Alicia", "Andrés", "Beatriz", "Carlos", "Carmen", "Clara", "Daniel", "Diego",
    "Elena", "Emilio", "Esteban", "Eva", "Fernando", "Gabriela", "Gonzalo", "Guillermo", "Hugo",
    "Inés", "Irene", "Javier", "Jorge", "Julia", "Laura", "Lucía", "Manuel", "Marcos", "María",
    "Marta", "Miguel", "Natalia", "Nuria", "Pablo", "Paula", "Raquel", "Rodrigo", "Rosa",
    "Sergio", "Teresa", "Víctor",
];

/// Unicode block ranges sampled by the emoji generator, inclusive on both
/// ends. Configuration data, not logic; every code point in these blocks is
/// a valid scalar value.
const EMOJI_BLOCKS: [(u32, u32); 6] = [
    (0x1F600, 0x1F64F), // emoticonos
    (0x1F680, 0x1F6C5), // transporte y mapas
    (0x1F300, 0x1F5FF), // pictogramas varios
    (0x1F900, 0x1F9FF), // pictogramas suplementarios
    (0x2600, 0x26FF),   // símbolos varios
    (0x2700, 0x27BF),   // dingbats
];

/// Normalized count-only parameters shared by the letter, character, name,
/// and emoji endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TextParams {
    pub count: i64,
}

/// Validated count-only text request.
#[derive(Debug, Clone, Copy)]
pub struct TextRequest {
    count: usize,
}

impl TextParams {
    /// Validate the count with endpoint-specific wording.
    pub fn validate(self, noun: &str) -> GenerationResult<TextRequest> {
        let count = checked_count(
            self.count,
            &format!("La cantidad de {noun} debe ser mayor a 0."),
            &format!("La cantidad de {noun} debe ser menor a 100."),
        )?;
        Ok(TextRequest { count })
    }
}

/// Uniform uppercase ASCII letters.
#[derive(Debug, Serialize, ToSchema)]
pub struct LetterPayload {
    pub letras: Vec<String>,
    pub cantidad: usize,
}

/// Draw `count` independent letters from A-Z.
pub fn letters<R: Rng + ?Sized>(req: &TextRequest, rng: &mut R) -> LetterPayload {
    let letras = (0..req.count)
        .map(|_| char::from(rng.gen_range(b'A'..=b'Z')).to_string())
        .collect();
    LetterPayload {
        letras,
        cantidad: req.count,
    }
}

/// Uniform printable ASCII characters.
#[derive(Debug, Serialize, ToSchema)]
pub struct CharacterPayload {
    pub caracteres: Vec<String>,
    pub cantidad: usize,
}

/// Draw `count` characters from printable ASCII (0x20..=0x7E, DEL excluded).
pub fn characters<R: Rng + ?Sized>(req: &TextRequest, rng: &mut R) -> CharacterPayload {
    let caracteres = (0..req.count)
        .map(|_| char::from(rng.gen_range(0x20u8..=0x7E)).to_string())
        .collect();
    CharacterPayload {
        caracteres,
        cantidad: req.count,
    }
}

/// Names drawn from the static corpus.
#[derive(Debug, Serialize, ToSchema)]
pub struct NamePayload {
    pub nombres: Vec<String>,
    pub cantidad: usize,
}

/// Draw `count` names with replacement from the corpus.
pub fn names<R: Rng + ?Sized>(req: &TextRequest, rng: &mut R) -> NamePayload {
    let nombres = (0..req.count)
        .map(|_| NAMES[rng.gen_range(0..NAMES.len())].to_owned())
        .collect();
    NamePayload {
        nombres,
        cantidad: req.count,
    }
}

/// Emoji drawn from the fixed block table.
#[derive(Debug, Serialize, ToSchema)]
pub struct EmojiPayload {
    pub emojis: Vec<String>,
    pub cantidad: usize,
}

/// Draw `count` emoji: uniformly pick a block, then a code point within it.
pub fn emoji<R: Rng + ?Sized>(req: &TextRequest, rng: &mut R) -> EmojiPayload {
    let emojis = (0..req.count)
        .map(|_| {
            let (start, end) = EMOJI_BLOCKS[rng.gen_range(0..EMOJI_BLOCKS.len())];
            let code_point = rng.gen_range(start..=end);
            // The blocks contain only valid scalar values.
            char::from_u32(code_point).unwrap_or('\u{FFFD}').to_string()
        })
        .collect();
    EmojiPayload {
        emojis,
        cantidad: req.count,
    }
}

/// Normalized parameters for `/api/ContraseñaAleatoria`.
#[derive(Debug, Clone, Copy)]
pub struct PasswordParams {
    pub length: i64,
    pub count: i64,
}

/// Validated password request.
#[derive(Debug, Clone, Copy)]
pub struct PasswordRequest {
    length: usize,
    count: usize,
}

impl PasswordParams {
    /// Check order: count (1001/1000), then length (1002/1003).
    pub fn validate(self) -> GenerationResult<PasswordRequest> {
        let count = checked_count(
            self.count,
            "La cantidad debe ser mayor a 0.",
            "La cantidad debe ser menor a 100.",
        )?;
        let length = checked_length(self.length)?;
        Ok(PasswordRequest { length, count })
    }
}

/// Labeled generated passwords.
#[derive(Debug, Serialize, ToSchema)]
pub struct PasswordPayload {
    pub contrasenas: BTreeMap<String, String>,
    pub longitud: usize,
    pub cantidad: usize,
}

/// Produce `count` passwords of `length` characters drawn independently and
/// uniformly from the fixed alphabet, keyed `contraseña_N`.
pub fn passwords<R: Rng + ?Sized>(req: &PasswordRequest, rng: &mut R) -> PasswordPayload {
    let contrasenas = (1..=req.count)
        .map(|i| {
            let password: String = (0..req.length)
                .map(|_| char::from(PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())]))
                .collect();
            (format!("contraseña_{i}"), password)
        })
        .collect();
    PasswordPayload {
        contrasenas,
        longitud: req.length,
        cantidad: req.count,
    }
}
