//! Slot loaders for the intents the shopping bot understands.

use super::event::SlotMap;
use super::model::LexRequest;
use super::strategy::{slot_decimal, slot_text, IntentLoader};

pub const GREETINGS: &str = "Greetings";
pub const BAKERY_DEPARTMENT: &str = "BakeryDepartment";
pub const MILK_DEPARTMENT: &str = "MilkDepartment";
pub const VEGETABLE_DEPARTMENT: &str = "VegetableDepartment";

pub mod slot {
    pub const FIRST_NAME: &str = "FirstName";
    pub const LAST_NAME: &str = "LastName";
    pub const BAKERY_PRODUCT: &str = "BakeryProduct";
    pub const MILK_PRODUCT: &str = "MilkProduct";
    pub const MILK_FATNESS: &str = "MilkFatness";
    pub const VEGETABLE_PRODUCT: &str = "VegetableProduct";
    pub const AMOUNT: &str = "Amount";
    pub const UNIT: &str = "Unit";
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GreetingsIntentLoader;

impl IntentLoader for GreetingsIntentLoader {
    fn intent_name(&self) -> &'static str {
        GREETINGS
    }

    fn slot_keys(&self) -> &'static [&'static str] {
        &[slot::FIRST_NAME, slot::LAST_NAME]
    }

    fn load(&self, request: &mut LexRequest, slots: Option<&SlotMap>) {
        request.first_name = slot_text(slots, slot::FIRST_NAME);
        request.last_name = slot_text(slots, slot::LAST_NAME);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BakeryDepartmentIntentLoader;

impl IntentLoader for BakeryDepartmentIntentLoader {
    fn intent_name(&self) -> &'static str {
        BAKERY_DEPARTMENT
    }

    fn slot_keys(&self) -> &'static [&'static str] {
        &[slot::BAKERY_PRODUCT, slot::AMOUNT, slot::UNIT]
    }

    fn load(&self, request: &mut LexRequest, slots: Option<&SlotMap>) {
        load_department_order(request, slots, slot::BAKERY_PRODUCT);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MilkDepartmentIntentLoader;

impl IntentLoader for MilkDepartmentIntentLoader {
    fn intent_name(&self) -> &'static str {
        MILK_DEPARTMENT
    }

    fn slot_keys(&self) -> &'static [&'static str] {
        &[slot::MILK_PRODUCT, slot::MILK_FATNESS, slot::AMOUNT, slot::UNIT]
    }

    fn load(&self, request: &mut LexRequest, slots: Option<&SlotMap>) {
        load_department_order(request, slots, slot::MILK_PRODUCT);
        request.fat_percentage = slot_decimal(slots, slot::MILK_FATNESS);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct VegetableDepartmentIntentLoader;

impl IntentLoader for VegetableDepartmentIntentLoader {
    fn intent_name(&self) -> &'static str {
        VEGETABLE_DEPARTMENT
    }

    fn slot_keys(&self) -> &'static [&'static str] {
        &[slot::VEGETABLE_PRODUCT, slot::AMOUNT, slot::UNIT]
    }

    fn load(&self, request: &mut LexRequest, slots: Option<&SlotMap>) {
        load_department_order(request, slots, slot::VEGETABLE_PRODUCT);
    }
}

fn load_department_order(request: &mut LexRequest, slots: Option<&SlotMap>, product_key: &str) {
    request.product = slot_text(slots, product_key);
    request.amount = slot_decimal(slots, slot::AMOUNT);
    request.unit = slot_text(slots, slot::UNIT);
}
