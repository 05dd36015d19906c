//! equran.id wire types and response structures.

use std::collections::HashMap;

use serde::Deserialize;

/// Response envelope wrapping every payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// Raw chapter record from `GET /surat`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSurah {
    pub nomor: u32,
    pub nama: String,
    pub nama_latin: String,
    pub jumlah_ayat: u32,
    pub tempat_turun: String,
    pub arti: String,
    #[serde(default)]
    pub deskripsi: String,
    #[serde(default)]
    pub audio_full: HashMap<String, String>,
}

/// Raw chapter record with verses from `GET /surat/{nomor}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSurahDetail {
    #[serde(flatten)]
    pub surah: RawSurah,
    #[serde(default)]
    pub ayat: Vec<RawAyah>,
    pub surat_selanjutnya: Option<Neighbour>,
    pub surat_sebelumnya: Option<Neighbour>,
}

/// Raw verse record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAyah {
    pub nomor_ayat: u32,
    pub teks_arab: String,
    #[serde(default)]
    pub teks_latin: String,
    #[serde(default)]
    pub teks_indonesia: String,
    #[serde(default)]
    pub audio: HashMap<String, String>,
}

/// Neighbouring chapter; the API sends `false` when there is none.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Neighbour {
    Surah(RawSurahRef),
    Absent(bool),
}

impl Neighbour {
    pub const fn as_surah(&self) -> Option<&RawSurahRef> {
        match self {
            Self::Surah(s) => Some(s),
            Self::Absent(_) => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSurahRef {
    pub nomor: u32,
    pub nama: String,
    pub nama_latin: String,
    pub jumlah_ayat: u32,
}
