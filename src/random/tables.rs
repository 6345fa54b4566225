//! Word lists used for generated names and titles.

/// Given names.
pub const FIRST_NAMES: &[&str] = &[
    "Alice", "Alejandro", "Ben", "Beatriz", "Charlie", "Carmen", "Daniel", "Dolores", "Emily",
    "Eduardo", "Frank", "Fernanda", "Grace", "Guillermo", "Henry", "Helena", "Isla", "Ignacio",
    "Jack", "Jimena", "Karen", "Kevin", "Liam", "Lucía", "Mia", "Mateo", "Noah", "Natalia",
    "Olivia", "Oscar", "Paul", "Pilar", "Quinn", "Queralt", "Rachel", "Raúl", "Sophie", "Sergio",
    "Thomas", "Tatiana", "Ursula", "Ulises", "Victor", "Valeria", "Wendy", "Wilmer", "Xander",
    "Ximena", "Yasmin", "Yago", "Zoe", "Zacarías",
];

/// Family names.
pub const LAST_NAMES: &[&str] = &[
    "Anderson", "Alonso", "Brown", "Barrios", "Carter", "Castillo", "Davis", "Díaz", "Evans",
    "Esparza", "Foster", "Fernández", "Garcia", "González", "Harris", "Herrera", "Ingram",
    "Iglesias", "Johnson", "Jiménez", "King", "Keller", "Lopez", "Luna", "Martinez", "Moreno",
    "Nelson", "Navarro", "Ortiz", "Oliver", "Parker", "Pérez", "Quinn", "Quijano", "Robinson",
    "Ramírez", "Smith", "Santos", "Taylor", "Torres", "Underwood", "Urbina", "Valentine",
    "Vargas", "Walker", "Wenceslao", "Xavier", "Ximénez", "Young", "Ybarra", "Zimmerman",
    "Zamora",
];

/// First word of a title.
pub const TITLE_ADJECTIVES: &[&str] = &[
    "Oscuro",
    "Misterioso",
    "Increíble",
    "Perdido",
    "Eterno",
    "Secreto",
    "Invisible",
    "Fantástico",
    "Siniestro",
    "Radiante",
];

/// Second word of a title.
pub const TITLE_NOUNS: &[&str] = &[
    "Bosque",
    "Destino",
    "Viaje",
    "Reino",
    "Mundo",
    "Labyrinth",
    "Sueño",
    "Enigma",
    "Secreto",
    "Guardian",
];

/// Closing phrase of a title.
pub const TITLE_COMPLEMENTS: &[&str] = &[
    "del Alba",
    "de la Noche",
    "del Más Allá",
    "de los Sueños",
    "de la Tormenta",
    "del Olvido",
    "de la Mente",
    "del Corazón",
    "de las Sombras",
    "de la Esperanza",
];
