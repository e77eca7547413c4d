use crate::shared::*;

/// Populate the built-in QuestionBank.
///
/// Pools (one per suggested topic, ≥ 6 questions each so a 5-question
/// draw still varies between runs):
///   Manga:   One Piece, Naruto, One Punch Man, Demon Slayer,
///            Attack on Titan, Jujutsu Kaisen, Spy x Family, Chainsaw Man
///   General: Ancient History, Quantum Physics, Japanese Cuisine
/// plus a general-knowledge fallback pool for topics matching nothing.
///
/// Bank questions are written at a broad middle difficulty; grade-specific
/// wording only applies to remotely generated quizzes.
pub fn populate_bank(bank: &mut QuestionBank) {
    bank.pools = vec![
        // ── One Piece ───────────────────────────────────────────────────────
        BankPool {
            topic: "One Piece".into(),
            questions: vec![
                Question {
                    id: 1,
                    text: "What is the name of Luffy's pirate crew?".into(),
                    options: vec![
                        "The Straw Hat Pirates".into(),
                        "The Red Hair Pirates".into(),
                        "The Heart Pirates".into(),
                        "The Blackbeard Pirates".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 2,
                    text: "Which Devil Fruit did Luffy eat as a child?".into(),
                    options: vec![
                        "The Flame-Flame Fruit".into(),
                        "The Ope-Ope Fruit".into(),
                        "The Gum-Gum Fruit".into(),
                        "The Smoke-Smoke Fruit".into(),
                    ],
                    correct_index: 2,
                },
                Question {
                    id: 3,
                    text: "Who serves as the swordsman of the Straw Hat crew?".into(),
                    options: vec![
                        "Sanji".into(),
                        "Roronoa Zoro".into(),
                        "Usopp".into(),
                        "Franky".into(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 4,
                    text: "What is the legendary treasure every pirate seeks?".into(),
                    options: vec![
                        "The Road Poneglyph".into(),
                        "The Grand Line".into(),
                        "The Devil Fruit".into(),
                        "The One Piece".into(),
                    ],
                    correct_index: 3,
                },
                Question {
                    id: 5,
                    text: "Who was the Pirate King executed at Loguetown?".into(),
                    options: vec![
                        "Gol D. Roger".into(),
                        "Whitebeard".into(),
                        "Shanks".into(),
                        "Monkey D. Garp".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 6,
                    text: "What was the Straw Hats' first proper ship called?".into(),
                    options: vec![
                        "The Thousand Sunny".into(),
                        "The Moby Dick".into(),
                        "The Going Merry".into(),
                        "The Red Force".into(),
                    ],
                    correct_index: 2,
                },
            ],
        },

        // ── Naruto ──────────────────────────────────────────────────────────
        BankPool {
            topic: "Naruto".into(),
            questions: vec![
                Question {
                    id: 1,
                    text: "What creature is sealed inside Naruto Uzumaki?".into(),
                    options: vec![
                        "The One-Tailed Shukaku".into(),
                        "The Nine-Tailed Fox".into(),
                        "The Eight-Tails".into(),
                        "A cursed serpent".into(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 2,
                    text: "Who leads Team 7 as its jonin teacher?".into(),
                    options: vec![
                        "Kakashi Hatake".into(),
                        "Jiraiya".into(),
                        "Iruka Umino".into(),
                        "Asuma Sarutobi".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 3,
                    text: "Which village is Naruto from?".into(),
                    options: vec![
                        "The Hidden Sand".into(),
                        "The Hidden Mist".into(),
                        "The Hidden Cloud".into(),
                        "The Hidden Leaf".into(),
                    ],
                    correct_index: 3,
                },
                Question {
                    id: 4,
                    text: "What is Naruto's signature jutsu?".into(),
                    options: vec![
                        "Chidori".into(),
                        "Fireball Jutsu".into(),
                        "Shadow Clone Jutsu".into(),
                        "Mind Transfer Jutsu".into(),
                    ],
                    correct_index: 2,
                },
                Question {
                    id: 5,
                    text: "Who leaves the village to seek power from Orochimaru?".into(),
                    options: vec![
                        "Sasuke Uchiha".into(),
                        "Shikamaru Nara".into(),
                        "Neji Hyuga".into(),
                        "Rock Lee".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 6,
                    text: "What title does Naruto dream of earning?".into(),
                    options: vec![
                        "Kazekage".into(),
                        "Hokage".into(),
                        "Sannin".into(),
                        "Anbu Captain".into(),
                    ],
                    correct_index: 1,
                },
            ],
        },

        // ── One Punch Man ───────────────────────────────────────────────────
        BankPool {
            topic: "One Punch Man".into(),
            questions: vec![
                Question {
                    id: 1,
                    text: "What hero name is Saitama registered under?".into(),
                    options: vec![
                        "Caped Baldy".into(),
                        "Mumen Rider".into(),
                        "Metal Bat".into(),
                        "King".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 2,
                    text: "Who is Saitama's cyborg disciple?".into(),
                    options: vec![
                        "Garou".into(),
                        "Sonic".into(),
                        "Genos".into(),
                        "Bang".into(),
                    ],
                    correct_index: 2,
                },
                Question {
                    id: 3,
                    text: "How many punches does Saitama usually need to win?".into(),
                    options: vec![
                        "Ten".into(),
                        "One".into(),
                        "Two".into(),
                        "One hundred".into(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 4,
                    text: "Which class is Saitama placed in after the hero exam?".into(),
                    options: vec![
                        "S-Class".into(),
                        "A-Class".into(),
                        "B-Class".into(),
                        "C-Class".into(),
                    ],
                    correct_index: 3,
                },
                Question {
                    id: 5,
                    text: "Which of these was part of Saitama's daily training routine?".into(),
                    options: vec![
                        "10 km of running".into(),
                        "Mountain climbing".into(),
                        "5 km of swimming".into(),
                        "Heavy weightlifting".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 6,
                    text: "Which ninja declares himself Saitama's eternal rival?".into(),
                    options: vec![
                        "Flashy Flash".into(),
                        "Speed-o'-Sound Sonic".into(),
                        "Atomic Samurai".into(),
                        "Zombieman".into(),
                    ],
                    correct_index: 1,
                },
            ],
        },

        // ── Demon Slayer ────────────────────────────────────────────────────
        BankPool {
            topic: "Demon Slayer".into(),
            questions: vec![
                Question {
                    id: 1,
                    text: "What is the name of Tanjiro's younger sister?".into(),
                    options: vec![
                        "Kanao".into(),
                        "Shinobu".into(),
                        "Nezuko".into(),
                        "Mitsuri".into(),
                    ],
                    correct_index: 2,
                },
                Question {
                    id: 2,
                    text: "Which breathing style does Tanjiro learn first?".into(),
                    options: vec![
                        "Water Breathing".into(),
                        "Flame Breathing".into(),
                        "Thunder Breathing".into(),
                        "Beast Breathing".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 3,
                    text: "Who turned Nezuko into a demon?".into(),
                    options: vec![
                        "Akaza".into(),
                        "Muzan Kibutsuji".into(),
                        "Rui".into(),
                        "Enmu".into(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 4,
                    text: "Which breathing style does Zenitsu use?".into(),
                    options: vec![
                        "Wind Breathing".into(),
                        "Mist Breathing".into(),
                        "Stone Breathing".into(),
                        "Thunder Breathing".into(),
                    ],
                    correct_index: 3,
                },
                Question {
                    id: 5,
                    text: "What organization do Tanjiro and his friends join?".into(),
                    options: vec![
                        "The Demon Slayer Corps".into(),
                        "The Twelve Kizuki".into(),
                        "The Wisteria Clan".into(),
                        "The Final Selection Guild".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 6,
                    text: "Inosuke charges into battle wearing the head of what animal?".into(),
                    options: vec![
                        "A wolf".into(),
                        "A bear".into(),
                        "A boar".into(),
                        "A fox".into(),
                    ],
                    correct_index: 2,
                },
            ],
        },

        // ── Attack on Titan ─────────────────────────────────────────────────
        BankPool {
            topic: "Attack on Titan".into(),
            questions: vec![
                Question {
                    id: 1,
                    text: "What protects humanity from the Titans outside?".into(),
                    options: vec![
                        "Three enormous walls".into(),
                        "A mountain range".into(),
                        "An underground city".into(),
                        "A ring of fortresses".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 2,
                    text: "Which regiment does Eren join to fight Titans beyond the walls?".into(),
                    options: vec![
                        "The Military Police".into(),
                        "The Survey Corps".into(),
                        "The Garrison".into(),
                        "The Royal Guard".into(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 3,
                    text: "Which Titan can Eren transform into?".into(),
                    options: vec![
                        "The Armored Titan".into(),
                        "The Colossal Titan".into(),
                        "The Beast Titan".into(),
                        "The Attack Titan".into(),
                    ],
                    correct_index: 3,
                },
                Question {
                    id: 4,
                    text: "Who is known as humanity's strongest soldier?".into(),
                    options: vec![
                        "Erwin Smith".into(),
                        "Levi Ackerman".into(),
                        "Jean Kirstein".into(),
                        "Connie Springer".into(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 5,
                    text: "What equipment lets soldiers swing through the air?".into(),
                    options: vec![
                        "Omni-directional mobility gear".into(),
                        "Steam-powered jet packs".into(),
                        "Grappling cannons".into(),
                        "Winged harnesses".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 6,
                    text: "Which wall is breached on the day the story begins?".into(),
                    options: vec![
                        "Wall Rose".into(),
                        "Wall Sina".into(),
                        "Wall Maria".into(),
                        "The inner gate".into(),
                    ],
                    correct_index: 2,
                },
            ],
        },

        // ── Jujutsu Kaisen ──────────────────────────────────────────────────
        BankPool {
            topic: "Jujutsu Kaisen".into(),
            questions: vec![
                Question {
                    id: 1,
                    text: "What does Yuji Itadori swallow to protect his friends?".into(),
                    options: vec![
                        "A cursed talisman".into(),
                        "Sukuna's finger".into(),
                        "A demon's eye".into(),
                        "A grade-one relic".into(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 2,
                    text: "Who mentors Yuji at Tokyo Jujutsu High?".into(),
                    options: vec![
                        "Satoru Gojo".into(),
                        "Kento Nanami".into(),
                        "Masamichi Yaga".into(),
                        "Suguru Geto".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 3,
                    text: "What power source do jujutsu sorcerers draw on?".into(),
                    options: vec![
                        "Chakra".into(),
                        "Nen".into(),
                        "Spirit pressure".into(),
                        "Cursed energy".into(),
                    ],
                    correct_index: 3,
                },
                Question {
                    id: 4,
                    text: "What is Megumi Fushiguro's inherited technique?".into(),
                    options: vec![
                        "The Limitless".into(),
                        "The Ten Shadows".into(),
                        "Straw Doll".into(),
                        "Idle Transfiguration".into(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 5,
                    text: "What does Nobara Kugisaki fight with?".into(),
                    options: vec![
                        "A hammer and nails".into(),
                        "A katana".into(),
                        "A longbow".into(),
                        "Cursed chains".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 6,
                    text: "What is Panda revealed to be?".into(),
                    options: vec![
                        "An ordinary panda".into(),
                        "A shikigami".into(),
                        "A mutated cursed corpse".into(),
                        "An illusion".into(),
                    ],
                    correct_index: 2,
                },
            ],
        },

        // ── Spy x Family ────────────────────────────────────────────────────
        BankPool {
            topic: "Spy x Family".into(),
            questions: vec![
                Question {
                    id: 1,
                    text: "What is Loid Forger's codename as a spy?".into(),
                    options: vec![
                        "Nightfall".into(),
                        "Twilight".into(),
                        "Dusk".into(),
                        "Shadow".into(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 2,
                    text: "What secret ability does Anya have?".into(),
                    options: vec![
                        "She can read minds".into(),
                        "She can see the future".into(),
                        "She has super strength".into(),
                        "She can turn invisible".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 3,
                    text: "What is Yor Forger's secret profession?".into(),
                    options: vec![
                        "Spy".into(),
                        "Detective".into(),
                        "Assassin".into(),
                        "Jewel thief".into(),
                    ],
                    correct_index: 2,
                },
                Question {
                    id: 4,
                    text: "Which animal joins the Forger household?".into(),
                    options: vec![
                        "A cat".into(),
                        "A parrot".into(),
                        "A hamster".into(),
                        "A large white dog".into(),
                    ],
                    correct_index: 3,
                },
                Question {
                    id: 5,
                    text: "Which school must Anya attend for Operation Strix?".into(),
                    options: vec![
                        "Eden Academy".into(),
                        "Berlint Grammar".into(),
                        "Ostania Prep".into(),
                        "Newston Hall".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 6,
                    text: "What snack does Anya love most?".into(),
                    options: vec![
                        "Strawberries".into(),
                        "Peanuts".into(),
                        "Ramen".into(),
                        "Chocolate".into(),
                    ],
                    correct_index: 1,
                },
            ],
        },

        // ── Chainsaw Man ────────────────────────────────────────────────────
        BankPool {
            topic: "Chainsaw Man".into(),
            questions: vec![
                Question {
                    id: 1,
                    text: "Which devil merges with Denji to save his life?".into(),
                    options: vec![
                        "Pochita, the Chainsaw Devil".into(),
                        "The Gun Devil".into(),
                        "The Bat Devil".into(),
                        "The Eternity Devil".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 2,
                    text: "Who recruits Denji into Public Safety?".into(),
                    options: vec![
                        "Aki Hayakawa".into(),
                        "Kishibe".into(),
                        "Makima".into(),
                        "Himeno".into(),
                    ],
                    correct_index: 2,
                },
                Question {
                    id: 3,
                    text: "What kind of fiend is Power?".into(),
                    options: vec![
                        "A blood fiend".into(),
                        "A shark fiend".into(),
                        "A violence fiend".into(),
                        "An angel fiend".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 4,
                    text: "What does Denji pull to transform into Chainsaw Man?".into(),
                    options: vec![
                        "A pin on his arm".into(),
                        "A lever on his back".into(),
                        "A chain on his neck".into(),
                        "A cord on his chest".into(),
                    ],
                    correct_index: 3,
                },
                Question {
                    id: 5,
                    text: "What does Pochita resemble in his weakened form?".into(),
                    options: vec![
                        "A small dog".into(),
                        "A cat".into(),
                        "A crow".into(),
                        "A rat".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 6,
                    text: "Which devil does Aki hold a contract with?".into(),
                    options: vec![
                        "The Future Devil's rival".into(),
                        "The Fox Devil".into(),
                        "The Darkness Devil".into(),
                        "The Zombie Devil".into(),
                    ],
                    correct_index: 1,
                },
            ],
        },

        // ── Ancient History ─────────────────────────────────────────────────
        BankPool {
            topic: "Ancient History".into(),
            questions: vec![
                Question {
                    id: 1,
                    text: "Which civilization built the pyramids at Giza?".into(),
                    options: vec![
                        "Mesopotamia".into(),
                        "Ancient Greece".into(),
                        "Ancient Egypt".into(),
                        "The Maya".into(),
                    ],
                    correct_index: 2,
                },
                Question {
                    id: 2,
                    text: "Who became the first emperor of Rome?".into(),
                    options: vec![
                        "Augustus".into(),
                        "Julius Caesar".into(),
                        "Nero".into(),
                        "Constantine".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 3,
                    text: "The Code of Hammurabi was written in which city?".into(),
                    options: vec![
                        "Athens".into(),
                        "Babylon".into(),
                        "Persepolis".into(),
                        "Carthage".into(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 4,
                    text: "Which Greek city-state was famed for its professional warriors?".into(),
                    options: vec![
                        "Athens".into(),
                        "Corinth".into(),
                        "Thebes".into(),
                        "Sparta".into(),
                    ],
                    correct_index: 3,
                },
                Question {
                    id: 5,
                    text: "What writing system did ancient Egyptians carve into monuments?".into(),
                    options: vec![
                        "Hieroglyphics".into(),
                        "Cuneiform".into(),
                        "Linear B".into(),
                        "Sanskrit".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 6,
                    text: "Alexander the Great ruled which kingdom?".into(),
                    options: vec![
                        "Persia".into(),
                        "Macedonia".into(),
                        "Egypt".into(),
                        "Babylon".into(),
                    ],
                    correct_index: 1,
                },
            ],
        },

        // ── Quantum Physics ─────────────────────────────────────────────────
        BankPool {
            topic: "Quantum Physics".into(),
            questions: vec![
                Question {
                    id: 1,
                    text: "What is the quantum particle of light called?".into(),
                    options: vec![
                        "The electron".into(),
                        "The neutrino".into(),
                        "The photon".into(),
                        "The proton".into(),
                    ],
                    correct_index: 2,
                },
                Question {
                    id: 2,
                    text: "Whose famous thought experiment involves a cat in a box?".into(),
                    options: vec![
                        "Schrödinger's".into(),
                        "Einstein's".into(),
                        "Bohr's".into(),
                        "Heisenberg's".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 3,
                    text: "Which principle forbids knowing position and momentum exactly at once?".into(),
                    options: vec![
                        "The exclusion principle".into(),
                        "The uncertainty principle".into(),
                        "The equivalence principle".into(),
                        "The correspondence principle".into(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 4,
                    text: "What experiment shows particles behaving like waves?".into(),
                    options: vec![
                        "The oil-drop experiment".into(),
                        "The gold-foil experiment".into(),
                        "The Michelson-Morley experiment".into(),
                        "The double-slit experiment".into(),
                    ],
                    correct_index: 3,
                },
                Question {
                    id: 5,
                    text: "Who first proposed that energy is emitted in discrete packets?".into(),
                    options: vec![
                        "Max Planck".into(),
                        "Isaac Newton".into(),
                        "James Clerk Maxwell".into(),
                        "Michael Faraday".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 6,
                    text: "What is the smallest discrete unit of a physical quantity called?".into(),
                    options: vec![
                        "A quark".into(),
                        "A quantum".into(),
                        "A joule".into(),
                        "A wavelet".into(),
                    ],
                    correct_index: 1,
                },
            ],
        },

        // ── Japanese Cuisine ────────────────────────────────────────────────
        BankPool {
            topic: "Japanese Cuisine".into(),
            questions: vec![
                Question {
                    id: 1,
                    text: "What dish pairs vinegared rice with fish or vegetables?".into(),
                    options: vec![
                        "Ramen".into(),
                        "Tempura".into(),
                        "Sushi".into(),
                        "Udon".into(),
                    ],
                    correct_index: 2,
                },
                Question {
                    id: 2,
                    text: "Which soup is made from fermented soybean paste?".into(),
                    options: vec![
                        "Miso soup".into(),
                        "Tonkotsu broth".into(),
                        "Oden".into(),
                        "Sumashi".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 3,
                    text: "What are lightly battered, deep-fried vegetables or seafood called?".into(),
                    options: vec![
                        "Yakitori".into(),
                        "Tempura".into(),
                        "Takoyaki".into(),
                        "Katsu".into(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 4,
                    text: "What is a rice ball wrapped in seaweed called?".into(),
                    options: vec![
                        "Mochi".into(),
                        "Dango".into(),
                        "Taiyaki".into(),
                        "Onigiri".into(),
                    ],
                    correct_index: 3,
                },
                Question {
                    id: 5,
                    text: "Which noodle is thick, white, and chewy?".into(),
                    options: vec![
                        "Udon".into(),
                        "Soba".into(),
                        "Somen".into(),
                        "Shirataki".into(),
                    ],
                    correct_index: 0,
                },
                Question {
                    id: 6,
                    text: "What drink is whisked from powdered green tea?".into(),
                    options: vec![
                        "Sake".into(),
                        "Matcha".into(),
                        "Mugicha".into(),
                        "Ramune".into(),
                    ],
                    correct_index: 1,
                },
            ],
        },
    ];

    // ── General-knowledge fallback ──────────────────────────────────────────
    bank.general = vec![
        Question {
            id: 1,
            text: "Which planet is known as the Red Planet?".into(),
            options: vec![
                "Venus".into(),
                "Mars".into(),
                "Jupiter".into(),
                "Mercury".into(),
            ],
            correct_index: 1,
        },
        Question {
            id: 2,
            text: "How many continents are there on Earth?".into(),
            options: vec![
                "Five".into(),
                "Six".into(),
                "Seven".into(),
                "Eight".into(),
            ],
            correct_index: 2,
        },
        Question {
            id: 3,
            text: "What gas do plants absorb from the air to make food?".into(),
            options: vec![
                "Carbon dioxide".into(),
                "Oxygen".into(),
                "Nitrogen".into(),
                "Hydrogen".into(),
            ],
            correct_index: 0,
        },
        Question {
            id: 4,
            text: "Who painted the Mona Lisa?".into(),
            options: vec![
                "Michelangelo".into(),
                "Raphael".into(),
                "Donatello".into(),
                "Leonardo da Vinci".into(),
            ],
            correct_index: 3,
        },
        Question {
            id: 5,
            text: "What is the largest ocean on Earth?".into(),
            options: vec![
                "The Atlantic Ocean".into(),
                "The Pacific Ocean".into(),
                "The Indian Ocean".into(),
                "The Arctic Ocean".into(),
            ],
            correct_index: 1,
        },
        Question {
            id: 6,
            text: "How many sides does a hexagon have?".into(),
            options: vec![
                "Six".into(),
                "Five".into(),
                "Seven".into(),
                "Eight".into(),
            ],
            correct_index: 0,
        },
        Question {
            id: 7,
            text: "What is the chemical formula for water?".into(),
            options: vec![
                "CO2".into(),
                "NaCl".into(),
                "H2O".into(),
                "O2".into(),
            ],
            correct_index: 2,
        },
        Question {
            id: 8,
            text: "Which instrument has 88 keys?".into(),
            options: vec![
                "The organ".into(),
                "The piano".into(),
                "The harp".into(),
                "The accordion".into(),
            ],
            correct_index: 1,
        },
    ];
}
