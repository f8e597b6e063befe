//! Skill tree, marketplace and crafting panels.
use strum::IntoEnumIterator;

use game_core::{
    GameConfig, ItemId, ListingId, PriceTrend, Rarity, RecipeCategory, RecipeId, SkillKind,
    skill_upgrade_cost,
};

use super::PanelContext;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillTreeView {
    pub gold: u64,
    pub skills: Vec<SkillRow>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillRow {
    pub skill: SkillKind,
    pub label: &'static str,
    pub level: u32,
    pub max_level: u32,
    /// Progress from hunting toward the next level.
    pub progress_pct: u32,
    /// Price of the next level; `None` at the cap.
    pub next_cost: Option<u64>,
    pub affordable: bool,
}

impl SkillTreeView {
    pub(super) fn build(ctx: &PanelContext<'_>) -> Self {
        let skills = &ctx.state.stats.skills;
        let gold = ctx.state.gold;
        let per_level = GameConfig::SKILL_POINTS_PER_LEVEL;

        let rows = SkillKind::iter()
            .map(|skill| {
                let level = skills.level(skill);
                let next_cost = (level < ctx.config.max_skill_level)
                    .then(|| skill_upgrade_cost(level, ctx.config));
                SkillRow {
                    skill,
                    label: skill.label(),
                    level,
                    max_level: ctx.config.max_skill_level,
                    progress_pct: skills.points(skill) % per_level * 100 / per_level,
                    next_cost,
                    affordable: next_cost.is_some_and(|cost| gold >= cost),
                }
            })
            .collect();

        Self { gold, skills: rows }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketView {
    pub gold: u64,
    pub listings: Vec<ListingRow>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRow {
    pub id: ListingId,
    pub item: ItemId,
    pub item_name: String,
    pub rarity: Option<Rarity>,
    pub quantity: u32,
    pub price: u64,
    pub seller: String,
    pub trend: PriceTrend,
    pub affordable: bool,
}

impl MarketView {
    pub(super) fn build(ctx: &PanelContext<'_>) -> Self {
        let gold = ctx.state.gold;
        let listings = ctx
            .economy
            .listings()
            .iter()
            .map(|listing| ListingRow {
                id: listing.id.clone(),
                item: listing.item.clone(),
                item_name: ctx.item_name(&listing.item),
                rarity: ctx.catalog.item(&listing.item).map(|item| item.rarity),
                quantity: listing.quantity,
                price: listing.price,
                seller: listing.seller.clone(),
                trend: listing.trend,
                affordable: gold >= listing.price,
            })
            .collect();

        Self { gold, listings }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CraftingView {
    pub recipes: Vec<RecipeRow>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeRow {
    pub id: RecipeId,
    pub name: String,
    pub category: RecipeCategory,
    pub result_name: String,
    pub result_quantity: u32,
    pub required_level: u32,
    pub materials: Vec<MaterialRow>,
    pub craftable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialRow {
    pub item: ItemId,
    pub name: String,
    pub required: u32,
    pub owned: u32,
}

impl MaterialRow {
    pub fn is_met(&self) -> bool {
        self.owned >= self.required
    }
}

impl CraftingView {
    pub(super) fn build(ctx: &PanelContext<'_>) -> Self {
        let state = ctx.state;
        let recipes = ctx
            .catalog
            .recipes()
            .iter()
            .map(|recipe| {
                let materials: Vec<_> = recipe
                    .materials
                    .iter()
                    .map(|stack| MaterialRow {
                        item: stack.item.clone(),
                        name: ctx.item_name(&stack.item),
                        required: stack.quantity,
                        owned: state.inventory.quantity_of(&stack.item),
                    })
                    .collect();
                let craftable = state.profile.level >= recipe.required_level
                    && materials.iter().all(MaterialRow::is_met);

                RecipeRow {
                    id: recipe.id.clone(),
                    name: recipe.name.clone(),
                    category: recipe.category,
                    result_name: ctx.item_name(&recipe.result),
                    result_quantity: recipe.result_quantity,
                    required_level: recipe.required_level,
                    materials,
                    craftable,
                }
            })
            .collect();

        Self { recipes }
    }
}
