//! Справочные таблицы: имена, города, улицы, типы операций.

pub static NAMES: &[&str] = &[
    "Nagy János", "Kovács Éva", "Tóth István", "Szabó Katalin", "Horváth Péter",
    "Kiss Mária", "Varga Ferenc", "Molnár Anna", "Németh László", "Balogh Erzsébet",
    "Farkas Katalin", "Papp Zoltán", "Takács Zsuzsa", "Juhász Gábor", "Lakatos Eszter",
    "Mészáros Attila", "Oláh Viktória", "Simon Balázs", "Rácz Judit", "Fekete Tamás",
];

pub static CITIES: &[&str] = &[
    "Budapest", "Debrecen", "Szeged", "Miskolc", "Pécs", "Győr", "Nyíregyháza",
    "Kecskemét", "Székesfehérvár", "Szombathely", "Eger", "Veszprém", "Zalaegerszeg",
    "Sopron", "Kaposvár", "Békéscsaba", "Tatabánya", "Szolnok", "Hódmezővásárhely", "Dunaújváros",
];

pub static STREETS: &[&str] = &[
    "Kossuth utca", "Petőfi utca", "Rákóczi út", "Ady Endre utca", "Dózsa György út",
    "Árpád út", "Béke tér", "Széchenyi utca", "Deák Ferenc utca", "Bajcsy-Zsilinszky út",
    "Bartók Béla út", "József Attila utca", "Hunyadi János utca", "Jókai utca", "Arany János utca",
    "Szent István körút", "Váci utca", "Alkotmány utca", "Baross utca", "Damjanich utca",
];

pub static TRANSACTION_TYPES: &[&str] = &[
    "ATM készpénzfelvétel", "Fizetés", "Online vásárlás", "Közüzemi számla fizetés",
    "Megtakarítási számlára utalás", "Készpénz befizetés", "Hitel törlesztés",
    "Biztosítási díj fizetés", "Ajándék utalás", "Étkezési költség",
    "Mobiltelefon számla", "Internetszolgáltatás díja", "Parkolási díj", "Üzemanyag vásárlás",
    "Ruházati vásárlás", "Orvosi vizsgálat díja", "Könyv vásárlás", "Mozi jegy",
    "Utazási költség", "Sportfelszerelés vásárlás",
];
