//! Conversion from equran.id wire records to domain types.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use std::collections::HashMap;

use mushaf_core::{
    types::{AudioSet, Reciter, SurahRef},
    Ayah, Error, Result, SurahDetail, SurahSummary,
};
use tracing::debug;

use crate::types::{Envelope, RawAyah, RawSurah, RawSurahDetail, RawSurahRef};

/// Unwrap the `{ code, message, data }` envelope.
pub fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T> {
    if envelope.code != 200 {
        return Err(Error::Api {
            code: envelope.code,
            message: envelope.message,
        });
    }
    envelope
        .data
        .ok_or_else(|| Error::Parse("response envelope has no data".to_string()))
}

/// Parse a chapter list record.
pub fn parse_surah(raw: RawSurah) -> Result<SurahSummary> {
    Ok(SurahSummary {
        number: raw.nomor,
        revelation: raw.tempat_turun.parse()?,
        name: raw.nama,
        latin_name: raw.nama_latin,
        meaning: raw.arti,
        verse_count: raw.jumlah_ayat,
        description: raw.deskripsi,
        full_audio: parse_audio(raw.audio_full),
    })
}

/// Parse a chapter detail record.
pub fn parse_surah_detail(raw: RawSurahDetail) -> Result<SurahDetail> {
    let next = raw
        .surat_selanjutnya
        .as_ref()
        .and_then(|n| n.as_surah())
        .map(parse_surah_ref);
    let previous = raw
        .surat_sebelumnya
        .as_ref()
        .and_then(|n| n.as_surah())
        .map(parse_surah_ref);

    let mut ayahs: Vec<Ayah> = raw.ayat.into_iter().map(parse_ayah).collect();
    ayahs.sort_by_key(|a| a.number);

    Ok(SurahDetail {
        summary: parse_surah(raw.surah)?,
        ayahs,
        next,
        previous,
    })
}

fn parse_ayah(raw: RawAyah) -> Ayah {
    Ayah {
        number: raw.nomor_ayat,
        arabic: raw.teks_arab,
        latin: raw.teks_latin,
        translation: raw.teks_indonesia,
        audio: parse_audio(raw.audio),
    }
}

fn parse_surah_ref(raw: &RawSurahRef) -> SurahRef {
    SurahRef {
        number: raw.nomor,
        name: raw.nama.clone(),
        latin_name: raw.nama_latin.clone(),
        verse_count: raw.jumlah_ayat,
    }
}

fn parse_audio(raw: HashMap<String, String>) -> AudioSet {
    let mut audio = AudioSet::new();
    for (key, url) in raw {
        match Reciter::from_key(&key) {
            Some(reciter) => audio.insert(reciter, url),
            None => debug!("Skipping audio for unknown reciter key {key}"),
        }
    }
    audio
}

#[cfg(test)]
mod tests {
    use super::*;
    use mushaf_core::Revelation;

    const LIST_JSON: &str = r#"{
        "code": 200,
        "message": "Data retrieved successfully",
        "data": [{
            "nomor": 1,
            "nama": "الفاتحة",
            "namaLatin": "Al-Fatihah",
            "jumlahAyat": 7,
            "tempatTurun": "Mekah",
            "arti": "Pembukaan",
            "deskripsi": "Surat <i>Al Faatihah</i> ...",
            "audioFull": {
                "01": "https://cdn.equran.id/audio-full/Abdullah-Al-Juhany/001.mp3",
                "05": "https://cdn.equran.id/audio-full/Misyari-Rasyid-Al-Afasi/001.mp3"
            }
        }]
    }"#;

    const DETAIL_JSON: &str = r#"{
        "code": 200,
        "message": "Data retrieved successfully",
        "data": {
            "nomor": 114,
            "nama": "الناس",
            "namaLatin": "An-Nas",
            "jumlahAyat": 2,
            "tempatTurun": "Mekah",
            "arti": "Manusia",
            "deskripsi": "",
            "audioFull": {},
            "ayat": [
                {
                    "nomorAyat": 2,
                    "teksArab": "مَلِكِ النَّاسِۙ",
                    "teksLatin": "malikin-nās(i).",
                    "teksIndonesia": "raja manusia,",
                    "audio": { "05": "https://cdn.equran.id/audio-partial/Misyari-Rasyid-Al-Afasi/114002.mp3" }
                },
                {
                    "nomorAyat": 1,
                    "teksArab": "قُلْ اَعُوْذُ بِرَبِّ النَّاسِۙ",
                    "teksLatin": "qul a‘ūżu birabbin-nās(i).",
                    "teksIndonesia": "Katakanlah, “Aku berlindung kepada Tuhannya manusia,",
                    "audio": {
                        "05": "https://cdn.equran.id/audio-partial/Misyari-Rasyid-Al-Afasi/114001.mp3",
                        "99": "https://example.invalid/ignored.mp3"
                    }
                }
            ],
            "suratSelanjutnya": false,
            "suratSebelumnya": {
                "nomor": 113,
                "nama": "الفلق",
                "namaLatin": "Al-Falaq",
                "jumlahAyat": 5
            }
        }
    }"#;

    #[test]
    fn test_parse_surah_list() {
        let envelope: Envelope<Vec<RawSurah>> = serde_json::from_str(LIST_JSON).unwrap();
        let raw = unwrap_envelope(envelope).unwrap();
        let surah = parse_surah(raw.into_iter().next().unwrap()).unwrap();

        assert_eq!(surah.number, 1);
        assert_eq!(surah.latin_name, "Al-Fatihah");
        assert_eq!(surah.verse_count, 7);
        assert_eq!(surah.revelation, Revelation::Mecca);
        assert!(surah.full_audio.get(Reciter::AbdullahAlJuhany).is_some());
        assert!(surah.full_audio.get(Reciter::IbrahimAlDossari).is_none());
    }

    #[test]
    fn test_parse_surah_detail() {
        let envelope: Envelope<RawSurahDetail> = serde_json::from_str(DETAIL_JSON).unwrap();
        let detail = parse_surah_detail(unwrap_envelope(envelope).unwrap()).unwrap();

        assert_eq!(detail.number(), 114);
        let numbers: Vec<u32> = detail.ayahs.iter().map(|a| a.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert!(detail.next.is_none());
        assert_eq!(detail.previous.as_ref().map(|p| p.number), Some(113));

        let first = detail.ayah(1).unwrap();
        assert_eq!(first.audio.0.len(), 1);
        assert!(first.audio_url(Reciter::MisyariRasyidAlAfasi).is_some());
    }

    #[test]
    fn test_envelope_error_code() {
        let json = r#"{ "code": 404, "message": "Surat tidak ditemukan", "data": null }"#;
        let envelope: Envelope<RawSurahDetail> = serde_json::from_str(json).unwrap();
        let err = unwrap_envelope(envelope).unwrap_err();
        assert!(matches!(err, Error::Api { code: 404, .. }));
    }

    #[test]
    fn test_envelope_missing_data() {
        let json = r#"{ "code": 200, "message": "ok" }"#;
        let envelope: Envelope<Vec<RawSurah>> = serde_json::from_str(json).unwrap();
        assert!(matches!(unwrap_envelope(envelope), Err(Error::Parse(_))));
    }

    #[test]
    fn test_unknown_revelation_is_parse_error() {
        let raw = RawSurah {
            nomor: 1,
            nama: String::new(),
            nama_latin: "Al-Fatihah".into(),
            jumlah_ayat: 7,
            tempat_turun: "Somewhere".into(),
            arti: String::new(),
            deskripsi: String::new(),
            audio_full: HashMap::new(),
        };
        assert!(matches!(parse_surah(raw), Err(Error::Parse(_))));
    }
}
