//! Small in-memory content set shared by unit tests.

use crate::config::GameConfig;
use crate::env::{
    AchievementDefinition, AchievementKind, BiomeDefinition, CatalogOracle, DropEntry,
    EconomyOracle, Env, Evolution, EvolutionRequirement, GameEnv, ItemDefinition, MarketListing,
    MonsterTemplate, ObjectiveKind, ObjectiveSpec, PcgRng, PriceTrend, ProgressionOracle,
    QuestGiver, QuestRewards, QuestTemplate, Recipe, RecipeCategory, WeatherDefinition,
    WeatherEffects, WeatherOracle,
};
use crate::state::{
    AchievementId, BiomeId, EquipmentSlot, Faction, GameState, Inventory, ItemCategory, ItemId,
    ItemStack, ListingId, MonsterId, PlayerProfile, PlayerStats, QuestId, Rarity, RecipeId,
    Skills, StaminaMeter, StatKind, StatModifier, WeatherKind,
};

pub(crate) struct TestWorld {
    biomes: Vec<BiomeDefinition>,
    monsters: Vec<MonsterTemplate>,
    items: Vec<ItemDefinition>,
    recipes: Vec<Recipe>,
    listings: Vec<MarketListing>,
    weather: Vec<WeatherDefinition>,
    quests: Vec<QuestTemplate>,
    givers: Vec<QuestGiver>,
    achievements: Vec<AchievementDefinition>,
    rng: PcgRng,
    pub config: GameConfig,
}

fn item(id: &str, rarity: Rarity, category: ItemCategory, stats: Vec<StatModifier>) -> ItemDefinition {
    ItemDefinition {
        id: ItemId::from(id),
        name: id.replace('-', " "),
        rarity,
        category,
        stats,
    }
}

fn drop_entry(id: &str, quantity: u32, rarity: Rarity, chance_pct: Option<u32>) -> DropEntry {
    DropEntry {
        item: ItemId::from(id),
        quantity,
        rarity,
        chance_pct,
    }
}

impl TestWorld {
    pub(crate) fn new() -> Self {
        let biome = |id: &str, name: &str| BiomeDefinition {
            id: BiomeId::from(id),
            name: name.into(),
            color: "green".into(),
        };

        Self {
            biomes: vec![biome("forest", "Whispering Forest"), biome("tundra", "Frozen Tundra")],
            monsters: vec![
                MonsterTemplate {
                    id: MonsterId::from("shadow-wolf"),
                    name: "Shadow Wolf".into(),
                    biome: BiomeId::from("forest"),
                    level: 15,
                    hunt_time_secs: 30,
                    drops: vec![
                        drop_entry("shadow-essence", 1, Rarity::Uncommon, Some(100)),
                        drop_entry("wolf-pelt", 2, Rarity::Common, None),
                    ],
                    gold_reward: 150,
                    xp_reward: 50,
                    evolution: None,
                },
                MonsterTemplate {
                    id: MonsterId::from("shadow-alpha"),
                    name: "Shadow Alpha".into(),
                    biome: BiomeId::from("forest"),
                    level: 25,
                    hunt_time_secs: 60,
                    drops: vec![drop_entry("shadow-essence", 2, Rarity::Uncommon, None)],
                    gold_reward: 400,
                    xp_reward: 120,
                    evolution: Some(Evolution {
                        from: MonsterId::from("shadow-wolf"),
                        requirement: EvolutionRequirement::Kills(3),
                    }),
                },
                MonsterTemplate {
                    id: MonsterId::from("tundra-yeti"),
                    name: "Tundra Yeti".into(),
                    biome: BiomeId::from("tundra"),
                    level: 25,
                    hunt_time_secs: 60,
                    drops: Vec::new(),
                    gold_reward: 350,
                    xp_reward: 100,
                    evolution: None,
                },
            ],
            items: vec![
                item("shadow-essence", Rarity::Uncommon, ItemCategory::Material, Vec::new()),
                item("wolf-pelt", Rarity::Common, ItemCategory::Material, Vec::new()),
                item("iron-ore", Rarity::Common, ItemCategory::Material, Vec::new()),
                item(
                    "shadow-blade",
                    Rarity::Epic,
                    ItemCategory::Equipment(EquipmentSlot::Weapon),
                    vec![
                        StatModifier::new(StatKind::AttackSpeed, 25),
                        StatModifier::new(StatKind::CritChance, 15),
                    ],
                ),
                item(
                    "iron-sword",
                    Rarity::Common,
                    ItemCategory::Equipment(EquipmentSlot::Weapon),
                    vec![StatModifier::new(StatKind::HuntSpeed, 10)],
                ),
                item("health-potion", Rarity::Common, ItemCategory::Consumable, Vec::new()),
                item("wolf-hunter-badge", Rarity::Rare, ItemCategory::Material, Vec::new()),
            ],
            recipes: vec![
                Recipe {
                    id: RecipeId::from("shadow-blade"),
                    name: "Shadow Blade".into(),
                    category: RecipeCategory::Weapon,
                    result: ItemId::from("shadow-blade"),
                    result_quantity: 1,
                    materials: vec![ItemStack::new("shadow-essence", 3), ItemStack::new("iron-ore", 2)],
                    required_level: 1,
                },
                Recipe {
                    id: RecipeId::from("health-potion"),
                    name: "Health Potion".into(),
                    category: RecipeCategory::Consumable,
                    result: ItemId::from("health-potion"),
                    result_quantity: 3,
                    materials: vec![ItemStack::new("wolf-pelt", 1)],
                    required_level: 5,
                },
            ],
            listings: vec![MarketListing {
                id: ListingId::from("iron-ore-bundle"),
                item: ItemId::from("iron-ore"),
                quantity: 5,
                price: 200,
                seller: "Miner101".into(),
                trend: PriceTrend::Stable,
            }],
            weather: vec![
                WeatherDefinition {
                    kind: WeatherKind::Clear,
                    name: "Clear Skies".into(),
                    effects: WeatherEffects::NEUTRAL,
                    duration_secs: 300,
                    weight: 40,
                },
                WeatherDefinition {
                    kind: WeatherKind::Storm,
                    name: "Thunderstorm".into(),
                    effects: WeatherEffects {
                        hunt_time_pct: 130,
                        loot_pct: 150,
                        encounter_pct: 70,
                        stamina_cost_pct: 120,
                    },
                    duration_secs: 120,
                    weight: 10,
                },
            ],
            quests: vec![
                QuestTemplate {
                    id: QuestId::from("wolf-extermination"),
                    title: "Shadow Wolf Extermination".into(),
                    description: "Thin out the wolves.".into(),
                    giver: "elder-maya".into(),
                    objectives: vec![ObjectiveSpec {
                        kind: ObjectiveKind::Kill(MonsterId::from("shadow-wolf")),
                        required: 2,
                    }],
                    rewards: QuestRewards {
                        gold: 1_500,
                        xp: 800,
                        items: vec![ItemStack::new("wolf-hunter-badge", 1)],
                        reputation: Some((Faction::CrystalWardens, 100)),
                    },
                    time_limit_secs: Some(3_600),
                    required_level: 1,
                },
                QuestTemplate {
                    id: QuestId::from("elite-challenge"),
                    title: "Elite Hunter Challenge".into(),
                    description: "Prove yourself.".into(),
                    giver: "elder-maya".into(),
                    objectives: vec![ObjectiveSpec {
                        kind: ObjectiveKind::Collect(ItemId::from("wolf-pelt")),
                        required: 2,
                    }],
                    rewards: QuestRewards::default(),
                    time_limit_secs: None,
                    required_level: 30,
                },
            ],
            givers: vec![QuestGiver {
                id: "elder-maya".into(),
                name: "Elder Maya".into(),
                faction: Faction::CrystalWardens,
                location: "Crystal Sanctum".into(),
                greeting: "Greetings, hunter.".into(),
            }],
            achievements: vec![
                AchievementDefinition {
                    id: AchievementId::from("first-blood"),
                    name: "First Blood".into(),
                    description: "Defeat a monster.".into(),
                    kind: AchievementKind::MonstersDefeated,
                    target: 1,
                },
                AchievementDefinition {
                    id: AchievementId::from("apprentice-smith"),
                    name: "Apprentice Smith".into(),
                    description: "Craft an item.".into(),
                    kind: AchievementKind::ItemsCrafted,
                    target: 1,
                },
            ],
            rng: PcgRng,
            config: GameConfig::default(),
        }
    }

    pub(crate) fn env(&self) -> GameEnv<'_> {
        Env::with_all(self, self, self, self, &self.rng, &self.config).into_game_env()
    }

    /// Fresh state without skills, gear or materials.
    pub(crate) fn blank_state(&self) -> GameState {
        GameState::with_seed(
            42,
            25_000,
            PlayerStats::new(StaminaMeter::full(100, 5), Skills::default()),
            PlayerProfile::default(),
            Inventory::new(),
        )
    }

    pub(crate) fn instantiate(&self, id: &str, quantity: u32) -> crate::state::InventoryItem {
        self.item(&ItemId::from(id))
            .map(|definition| definition.instantiate(quantity))
            .expect("test item exists")
    }
}

impl CatalogOracle for TestWorld {
    fn biomes(&self) -> &[BiomeDefinition] {
        &self.biomes
    }

    fn monsters(&self) -> &[MonsterTemplate] {
        &self.monsters
    }

    fn items(&self) -> &[ItemDefinition] {
        &self.items
    }

    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

impl EconomyOracle for TestWorld {
    fn listings(&self) -> &[MarketListing] {
        &self.listings
    }
}

impl WeatherOracle for TestWorld {
    fn weather_table(&self) -> &[WeatherDefinition] {
        &self.weather
    }
}

impl ProgressionOracle for TestWorld {
    fn quests(&self) -> &[QuestTemplate] {
        &self.quests
    }

    fn quest_givers(&self) -> &[QuestGiver] {
        &self.givers
    }

    fn achievements(&self) -> &[AchievementDefinition] {
        &self.achievements
    }
}
