use derive_more::{Display, From, Into};

/// Classification the candidate generator needs from an item.
///
/// Categories are checked in order sword, tool, armor, bow, fishing rod, book;
/// an item answering true to several is treated as the first one.
pub trait EnchantableItem {
    fn is_sword(&self) -> bool;

    fn is_tool(&self) -> bool;

    fn is_armor(&self) -> bool;

    fn is_helmet(&self) -> bool;

    fn is_boots(&self) -> bool;

    fn is_bow(&self) -> bool;

    fn is_fishing_rod(&self) -> bool;

    fn is_book(&self) -> bool;

    /// Turns a plain book into its enchanted variant.
    fn convert_to_enchanted_book(&mut self);
}

/// Legacy numeric item id.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Debug, Display, From, Into)]
pub struct ItemId(pub u16);

pub const IRON_SHOVEL: ItemId = ItemId(256);
pub const IRON_PICKAXE: ItemId = ItemId(257);
pub const IRON_AXE: ItemId = ItemId(258);
pub const BOW: ItemId = ItemId(261);
pub const IRON_SWORD: ItemId = ItemId(267);
pub const WOODEN_SWORD: ItemId = ItemId(268);
pub const WOODEN_SHOVEL: ItemId = ItemId(269);
pub const WOODEN_PICKAXE: ItemId = ItemId(270);
pub const WOODEN_AXE: ItemId = ItemId(271);
pub const STONE_SWORD: ItemId = ItemId(272);
pub const STONE_SHOVEL: ItemId = ItemId(273);
pub const STONE_PICKAXE: ItemId = ItemId(274);
pub const STONE_AXE: ItemId = ItemId(275);
pub const DIAMOND_SWORD: ItemId = ItemId(276);
pub const DIAMOND_SHOVEL: ItemId = ItemId(277);
pub const DIAMOND_PICKAXE: ItemId = ItemId(278);
pub const DIAMOND_AXE: ItemId = ItemId(279);
pub const GOLDEN_SWORD: ItemId = ItemId(283);
pub const GOLDEN_SHOVEL: ItemId = ItemId(284);
pub const GOLDEN_PICKAXE: ItemId = ItemId(285);
pub const GOLDEN_AXE: ItemId = ItemId(286);
pub const WOODEN_HOE: ItemId = ItemId(290);
pub const STONE_HOE: ItemId = ItemId(291);
pub const IRON_HOE: ItemId = ItemId(292);
pub const DIAMOND_HOE: ItemId = ItemId(293);
pub const GOLDEN_HOE: ItemId = ItemId(294);
pub const LEATHER_HELMET: ItemId = ItemId(298);
pub const LEATHER_CHESTPLATE: ItemId = ItemId(299);
pub const LEATHER_LEGGINGS: ItemId = ItemId(300);
pub const LEATHER_BOOTS: ItemId = ItemId(301);
pub const CHAINMAIL_HELMET: ItemId = ItemId(302);
pub const CHAINMAIL_CHESTPLATE: ItemId = ItemId(303);
pub const CHAINMAIL_LEGGINGS: ItemId = ItemId(304);
pub const CHAINMAIL_BOOTS: ItemId = ItemId(305);
pub const IRON_HELMET: ItemId = ItemId(306);
pub const IRON_CHESTPLATE: ItemId = ItemId(307);
pub const IRON_LEGGINGS: ItemId = ItemId(308);
pub const IRON_BOOTS: ItemId = ItemId(309);
pub const DIAMOND_HELMET: ItemId = ItemId(310);
pub const DIAMOND_CHESTPLATE: ItemId = ItemId(311);
pub const DIAMOND_LEGGINGS: ItemId = ItemId(312);
pub const DIAMOND_BOOTS: ItemId = ItemId(313);
pub const GOLDEN_HELMET: ItemId = ItemId(314);
pub const GOLDEN_CHESTPLATE: ItemId = ItemId(315);
pub const GOLDEN_LEGGINGS: ItemId = ItemId(316);
pub const GOLDEN_BOOTS: ItemId = ItemId(317);
pub const BOOK: ItemId = ItemId(340);
pub const FISHING_ROD: ItemId = ItemId(346);
pub const ENCHANTED_BOOK: ItemId = ItemId(403);

pub struct Item {
    pub id: ItemId,
    pub identifier: &'static str,
}

pub static ITEMS: &[Item] = &[
    Item { id: IRON_SHOVEL, identifier: "iron_shovel" },
    Item { id: IRON_PICKAXE, identifier: "iron_pickaxe" },
    Item { id: IRON_AXE, identifier: "iron_axe" },
    Item { id: BOW, identifier: "bow" },
    Item { id: IRON_SWORD, identifier: "iron_sword" },
    Item { id: WOODEN_SWORD, identifier: "wooden_sword" },
    Item { id: WOODEN_SHOVEL, identifier: "wooden_shovel" },
    Item { id: WOODEN_PICKAXE, identifier: "wooden_pickaxe" },
    Item { id: WOODEN_AXE, identifier: "wooden_axe" },
    Item { id: STONE_SWORD, identifier: "stone_sword" },
    Item { id: STONE_SHOVEL, identifier: "stone_shovel" },
    Item { id: STONE_PICKAXE, identifier: "stone_pickaxe" },
    Item { id: STONE_AXE, identifier: "stone_axe" },
    Item { id: DIAMOND_SWORD, identifier: "diamond_sword" },
    Item { id: DIAMOND_SHOVEL, identifier: "diamond_shovel" },
    Item { id: DIAMOND_PICKAXE, identifier: "diamond_pickaxe" },
    Item { id: DIAMOND_AXE, identifier: "diamond_axe" },
    Item { id: GOLDEN_SWORD, identifier: "golden_sword" },
    Item { id: GOLDEN_SHOVEL, identifier: "golden_shovel" },
    Item { id: GOLDEN_PICKAXE, identifier: "golden_pickaxe" },
    Item { id: GOLDEN_AXE, identifier: "golden_axe" },
    Item { id: WOODEN_HOE, identifier: "wooden_hoe" },
    Item { id: STONE_HOE, identifier: "stone_hoe" },
    Item { id: IRON_HOE, identifier: "iron_hoe" },
    Item { id: DIAMOND_HOE, identifier: "diamond_hoe" },
    Item { id: GOLDEN_HOE, identifier: "golden_hoe" },
    Item { id: LEATHER_HELMET, identifier: "leather_helmet" },
    Item { id: LEATHER_CHESTPLATE, identifier: "leather_chestplate" },
    Item { id: LEATHER_LEGGINGS, identifier: "leather_leggings" },
    Item { id: LEATHER_BOOTS, identifier: "leather_boots" },
    Item { id: CHAINMAIL_HELMET, identifier: "chainmail_helmet" },
    Item { id: CHAINMAIL_CHESTPLATE, identifier: "chainmail_chestplate" },
    Item { id: CHAINMAIL_LEGGINGS, identifier: "chainmail_leggings" },
    Item { id: CHAINMAIL_BOOTS, identifier: "chainmail_boots" },
    Item { id: IRON_HELMET, identifier: "iron_helmet" },
    Item { id: IRON_CHESTPLATE, identifier: "iron_chestplate" },
    Item { id: IRON_LEGGINGS, identifier: "iron_leggings" },
    Item { id: IRON_BOOTS, identifier: "iron_boots" },
    Item { id: DIAMOND_HELMET, identifier: "diamond_helmet" },
    Item { id: DIAMOND_CHESTPLATE, identifier: "diamond_chestplate" },
    Item { id: DIAMOND_LEGGINGS, identifier: "diamond_leggings" },
    Item { id: DIAMOND_BOOTS, identifier: "diamond_boots" },
    Item { id: GOLDEN_HELMET, identifier: "golden_helmet" },
    Item { id: GOLDEN_CHESTPLATE, identifier: "golden_chestplate" },
    Item { id: GOLDEN_LEGGINGS, identifier: "golden_leggings" },
    Item { id: GOLDEN_BOOTS, identifier: "golden_boots" },
    Item { id: BOOK, identifier: "book" },
    Item { id: FISHING_ROD, identifier: "fishing_rod" },
    Item { id: ENCHANTED_BOOK, identifier: "enchanted_book" },
];

/// Finds an item by identifier (`diamond_sword`, optionally `minecraft:`-prefixed)
/// or by numeric id.
pub fn lookup(name: &str) -> Option<&'static Item> {
    if let Ok(id) = name.parse::<u16>() {
        return ITEMS.iter().find(|item| item.id.0 == id);
    }
    let name = name.strip_prefix("minecraft:").unwrap_or(name);
    ITEMS
        .iter()
        .find(|item| item.identifier.eq_ignore_ascii_case(name))
}

impl ItemId {
    pub fn identifier(self) -> Option<&'static str> {
        ITEMS
            .iter()
            .find(|item| item.id == self)
            .map(|item| item.identifier)
    }
}

impl EnchantableItem for ItemId {
    fn is_sword(&self) -> bool {
        matches!(
            *self,
            WOODEN_SWORD | STONE_SWORD | IRON_SWORD | GOLDEN_SWORD | DIAMOND_SWORD
        )
    }

    fn is_tool(&self) -> bool {
        matches!(
            *self,
            WOODEN_PICKAXE
                | STONE_PICKAXE
                | IRON_PICKAXE
                | GOLDEN_PICKAXE
                | DIAMOND_PICKAXE
                | WOODEN_AXE
                | STONE_AXE
                | IRON_AXE
                | GOLDEN_AXE
                | DIAMOND_AXE
                | WOODEN_SHOVEL
                | STONE_SHOVEL
                | IRON_SHOVEL
                | GOLDEN_SHOVEL
                | DIAMOND_SHOVEL
                | WOODEN_HOE
                | STONE_HOE
                | IRON_HOE
                | GOLDEN_HOE
                | DIAMOND_HOE
        )
    }

    fn is_armor(&self) -> bool {
        (LEATHER_HELMET.0..=GOLDEN_BOOTS.0).contains(&self.0)
    }

    // armor ids run helmet, chestplate, leggings, boots per material
    fn is_helmet(&self) -> bool {
        self.is_armor() && (self.0 - LEATHER_HELMET.0) % 4 == 0
    }

    fn is_boots(&self) -> bool {
        self.is_armor() && (self.0 - LEATHER_HELMET.0) % 4 == 3
    }

    fn is_bow(&self) -> bool {
        *self == BOW
    }

    fn is_fishing_rod(&self) -> bool {
        *self == FISHING_ROD
    }

    fn is_book(&self) -> bool {
        *self == BOOK
    }

    fn convert_to_enchanted_book(&mut self) {
        *self = ENCHANTED_BOOK;
    }
}
