//! Builtin lexicon seed — the glossary shipped with the binary.
//!
//! Regions appear in [`SEED`] in display order, and entries within a region in
//! their default display order. Region metadata lives in a compile-time
//! perfect hash map because it is looked up by key on every render.

use crate::types::LexiconEntry;

/// Display metadata for a region key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionInfo {
    pub name: &'static str,
    pub area: &'static str,
}

pub static REGIONS: phf::Map<&'static str, RegionInfo> = phf::phf_map! {
    "arek" => RegionInfo { name: "Arek", area: "Surabaya, Malang, Sidoarjo, Mojokerto" },
    "mataraman" => RegionInfo { name: "Mataraman", area: "Madiun, Kediri, Ngawi, Tulungagung" },
    "panaragan" => RegionInfo { name: "Panaragan", area: "Ponorogo" },
    "madura" => RegionInfo { name: "Madura", area: "Bangkalan, Sampang, Pamekasan, Sumenep" },
    "pandalungan" => RegionInfo { name: "Pandalungan", area: "Jember, Lumajang, Bondowoso, Situbondo" },
    "osing" => RegionInfo { name: "Osing", area: "Banyuwangi" },
    "tengger" => RegionInfo { name: "Tengger", area: "Bromo highlands: Probolinggo, Pasuruan, Malang, Lumajang" },
};

/// Human-readable name of a region, falling back to the key itself.
pub fn region_name(key: &str) -> &str {
    REGIONS.get(key).map(|info| info.name).unwrap_or(key)
}

/// A `'static` seed row. Converted into an owned [`LexiconEntry`] when the
/// builtin store is first accessed.
#[derive(Debug, Clone, Copy)]
pub struct SeedEntry {
    pub term: &'static str,
    pub definition: &'static str,
    pub etymology: Option<&'static str>,
    pub cultural_meaning: Option<&'static str>,
    pub variants: &'static [&'static str],
    pub common_meaning: Option<&'static str>,
    pub note: Option<&'static str>,
    pub availability: Option<&'static str>,
    pub transliteration: Option<&'static str>,
    pub image_id: Option<&'static str>,
}

impl SeedEntry {
    const BLANK: SeedEntry = SeedEntry {
        term: "",
        definition: "",
        etymology: None,
        cultural_meaning: None,
        variants: &[],
        common_meaning: None,
        note: None,
        availability: None,
        transliteration: None,
        image_id: None,
    };

    /// Owned entry for `region`, with its term code derived.
    pub fn to_entry(&self, region: &str) -> LexiconEntry {
        let owned = |s: Option<&'static str>| s.map(str::to_string);
        LexiconEntry {
            etymology: owned(self.etymology),
            cultural_meaning: owned(self.cultural_meaning),
            variants: self.variants.iter().map(|v| v.to_string()).collect(),
            common_meaning: owned(self.common_meaning),
            note: owned(self.note),
            availability: owned(self.availability),
            transliteration: owned(self.transliteration),
            image_id: owned(self.image_id),
            ..LexiconEntry::new(region, self.term, self.definition)
        }
    }
}

pub static SEED: &[(&str, &[SeedEntry])] = &[
    ("arek", AREK),
    ("mataraman", MATARAMAN),
    ("panaragan", PANARAGAN),
    ("madura", MADURA),
    ("pandalungan", PANDALUNGAN),
    ("osing", OSING),
    ("tengger", TENGGER),
];

const AREK: &[SeedEntry] = &[
    SeedEntry {
        term: "Ludruk",
        definition: "Teater rakyat berbahasa Jawa dialek Arek yang mengangkat kisah keseharian, dibuka dengan tari Remo dan kidungan.",
        etymology: Some("Diduga dari gabungan 'gela-gelo' dan 'gedrag-gedrug', gerak kepala dan hentakan kaki pemain."),
        cultural_meaning: Some("Media kritik sosial dan hiburan kaum pekerja kota."),
        common_meaning: Some("Pertunjukan lawak dan drama panggung."),
        variants: &["Ludruk Besutan", "Ludruk Lerok"],
        availability: Some("Pementasan rutin di Taman Hiburan Rakyat Surabaya."),
        transliteration: Some("lu-druk"),
        image_id: Some("arek-ludruk"),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Remo",
        definition: "Tari pembuka yang menggambarkan keberanian seorang pemuda, ditandai gerak kaki tegas dan gemerincing gongseng.",
        cultural_meaning: Some("Penyambutan tamu kehormatan dan pembuka pertunjukan ludruk."),
        variants: &["Remo Bolet", "Remo Putri", "Remo Surabayan"],
        image_id: Some("arek-remo"),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Kidungan Jula-Juli",
        definition: "Tembang berbalas pantun berirama jula-juli yang dinyanyikan pelawak ludruk.",
        common_meaning: Some("Parikan yang dilagukan."),
        note: Some("Isi parikan sering berisi sindiran terhadap keadaan sosial."),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Batik Malangan",
        definition: "Batik khas Malang dengan motif topeng, candi, dan tumbuhan teratai berlatar sulur.",
        cultural_meaning: Some("Menegaskan identitas Malang sebagai bekas wilayah kerajaan Singhasari."),
        variants: &["Batik Celaket"],
        availability: Some("Sentra kerajinan di Kota dan Kabupaten Malang."),
        image_id: Some("arek-batik-malangan"),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Topeng Malangan",
        definition: "Drama tari bertopeng kayu yang membawakan lakon Panji, berkembang di pedesaan Malang.",
        etymology: Some("Topeng, penutup wajah; Malangan, gaya Malang."),
        cultural_meaning: Some("Setiap warna topeng melambangkan watak tokoh."),
        ..SeedEntry::BLANK
    },
];

const MATARAMAN: &[SeedEntry] = &[
    SeedEntry {
        term: "Jaranan",
        definition: "Tari kuda lumping dengan properti kuda anyaman bambu, diiringi kendang, kenong, dan slompret.",
        cultural_meaning: Some("Ritual tolak bala dan ekspresi kegembiraan rakyat agraris."),
        variants: &["Jaranan Thek", "Jaranan Pegon", "Jaranan Sentherewe"],
        note: Some("Adegan ndadi, penari kesurupan, menjadi puncak pertunjukan."),
        image_id: Some("mataraman-jaranan"),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Langen Tayub",
        definition: "Pertunjukan tari pergaulan antara penari perempuan (waranggana) dan tamu laki-laki yang diberi sampur.",
        etymology: Some("Tayub dari 'ditata supaya guyub', ditata agar rukun."),
        common_meaning: Some("Tayuban."),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Nyadran",
        definition: "Tradisi membersihkan makam leluhur dan kenduri bersama menjelang bulan Ramadan.",
        cultural_meaning: Some("Penghormatan kepada leluhur dan perekat kerukunan desa."),
        variants: &["Sadranan"],
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Kethek Ogleng",
        definition: "Tari yang menirukan gerak kera, bersumber dari cerita Panji Asmarabangun dan Dewi Sekartaji.",
        availability: Some("Pacitan dan sekitarnya."),
        ..SeedEntry::BLANK
    },
];

const PANARAGAN: &[SeedEntry] = &[
    SeedEntry {
        term: "Reog",
        definition: "Seni pertunjukan Ponorogo dengan topeng singa barong berhias bulu merak yang diangkat dengan gigitan.",
        etymology: Some("Dikaitkan dengan kata 'riyet', keadaan bangunan yang hampir rubuh."),
        cultural_meaning: Some("Sindiran terhadap penguasa pada masa Kerajaan Majapahit akhir."),
        variants: &["Reyog", "Reog Ponorogo"],
        transliteration: Some("re-yog"),
        image_id: Some("panaragan-reog"),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Warok",
        definition: "Tokoh panutan dalam kesenian reog yang dipandang memiliki kekuatan lahir dan batin.",
        cultural_meaning: Some("Lambang keteguhan, perlindungan, dan kebijaksanaan."),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Jathil",
        definition: "Penari berkuda kepang dalam reog yang menggambarkan prajurit berkuda.",
        note: Some("Awalnya dibawakan penari laki-laki, kini umumnya penari perempuan."),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Bujang Ganong",
        definition: "Tokoh patih muda bertopeng merah dengan mata melotot dan gerak akrobatik dalam reog.",
        common_meaning: Some("Ganongan."),
        ..SeedEntry::BLANK
    },
];

const MADURA: &[SeedEntry] = &[
    SeedEntry {
        term: "Karapan Sapi",
        definition: "Lomba pacuan sepasang sapi yang menarik kaleles (kereta kayu) dengan joki di atasnya.",
        etymology: Some("Kerap, berangkat bersama-sama."),
        cultural_meaning: Some("Gengsi sosial pemilik sapi dan perayaan pascapanen."),
        variants: &["Kerapan Sapi"],
        availability: Some("Musim karapan Agustus sampai Oktober."),
        image_id: Some("madura-karapan"),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Sape Sono'",
        definition: "Kontes kecantikan sepasang sapi betina yang berjalan serempak diiringi musik saronen.",
        common_meaning: Some("Sapi sonok."),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Saronen",
        definition: "Ansambel musik tiup khas Madura dengan alat utama saronen, sejenis terompet kayu.",
        variants: &["Sronen"],
        transliteration: Some("sa-ro-nen"),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Tanean Lanjhang",
        definition: "Pola permukiman memanjang satu keluarga besar dengan langgar di ujung barat halaman.",
        etymology: Some("Tanean, halaman; lanjhang, panjang."),
        cultural_meaning: Some("Ikatan kekerabatan matrilokal dan kedekatan dengan ibadah."),
        ..SeedEntry::BLANK
    },
];

const PANDALUNGAN: &[SeedEntry] = &[
    SeedEntry {
        term: "Can Macanan Kadduk",
        definition: "Pertunjukan kostum macan dari karung goni yang diarak keliling desa di Jember.",
        etymology: Some("Macanan, tiruan macan; kadduk, karung goni (Madura)."),
        cultural_meaning: Some("Penjaga sawah dari gangguan hama dan hewan liar."),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Petik Laut",
        definition: "Upacara syukur nelayan dengan melarung sesaji ke laut.",
        cultural_meaning: Some("Permohonan keselamatan dan hasil tangkapan melimpah."),
        variants: &["Larung Sesaji", "Rokat Tase'"],
        availability: Some("Pantai Puger, Jember, setiap bulan Suro."),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Lahbako",
        definition: "Tari kreasi yang menggambarkan buruh perempuan memilah dan mengolah daun tembakau.",
        note: Some("Jember dikenal sebagai kota tembakau."),
        ..SeedEntry::BLANK
    },
];

const OSING: &[SeedEntry] = &[
    SeedEntry {
        term: "Gandrung",
        definition: "Tari pergaulan Banyuwangi yang dibawakan penari perempuan sepanjang malam dalam tiga babak.",
        etymology: Some("Gandrung, tergila-gila atau sangat rindu."),
        cultural_meaning: Some("Ungkapan syukur masyarakat agraris kepada Dewi Sri."),
        variants: &["Gandrung Marsan", "Paju Gandrung"],
        transliteration: Some("gan-drung"),
        image_id: Some("osing-gandrung"),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Seblang",
        definition: "Ritual bersih desa di Olehsari dan Bakungan dengan penari yang menari dalam keadaan trans.",
        cultural_meaning: Some("Tolak bala dan permohonan kesuburan."),
        availability: Some("Sepekan setelah Idulfitri (Olehsari) dan setelah Iduladha (Bakungan)."),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Kebo-keboan",
        definition: "Upacara petani Alasmalang dan Aliyan ketika warga berdandan dan bertingkah seperti kerbau membajak sawah.",
        cultural_meaning: Some("Memohon hujan dan panen yang baik."),
        variants: &["Keboan Aliyan"],
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Barong Ider Bumi",
        definition: "Arak-arakan barong keliling Desa Kemiren pada hari kedua bulan Syawal.",
        cultural_meaning: Some("Menolak pagebluk dan menjaga keselamatan desa."),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Mepe Kasur",
        definition: "Tradisi menjemur kasur merah-hitam secara serentak di depan rumah warga Kemiren.",
        cultural_meaning: Some("Merah untuk keberanian, hitam untuk kelanggengan rumah tangga."),
        ..SeedEntry::BLANK
    },
];

const TENGGER: &[SeedEntry] = &[
    SeedEntry {
        term: "Pujan",
        definition: "Rangkaian upacara desa suku Tengger yang dilaksanakan pada bulan-bulan tertentu kalender Tengger.",
        cultural_meaning: Some("Persembahan kepada Sang Hyang Widhi dan leluhur demi keselamatan desa."),
        variants: &["Pujan Kapat", "Pujan Kawolu", "Pujan Kasanga"],
        note: Some("Dipimpin oleh dukun pandita desa."),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Yadnya Kasada",
        definition: "Upacara melarung hasil bumi ke kawah Gunung Bromo pada bulan Kasada.",
        etymology: Some("Yadnya, persembahan suci; Kasada, bulan kedua belas kalender Tengger."),
        cultural_meaning: Some("Mengenang pengorbanan Raden Kusuma, putra Rara Anteng dan Jaka Seger."),
        variants: &["Kasodo"],
        availability: Some("Purnama bulan Kasada, di Pura Luhur Poten dan kawah Bromo."),
        image_id: Some("tengger-kasada"),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Karo",
        definition: "Hari raya terbesar masyarakat Tengger yang dirayakan dengan saling berkunjung dan tari sodoran.",
        common_meaning: Some("Riaya Karo."),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Entas-entas",
        definition: "Upacara penyucian arwah leluhur agar mencapai tempat yang layak.",
        note: Some("Diselenggarakan keluarga pada hari ke-1000 setelah kematian."),
        ..SeedEntry::BLANK
    },
    SeedEntry {
        term: "Dukun Pandita",
        definition: "Pemimpin upacara adat Tengger yang dipilih dan diuji pada malam Kasada.",
        transliteration: Some("du-kun pan-di-ta"),
        ..SeedEntry::BLANK
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
