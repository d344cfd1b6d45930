//! End-to-end ordering scenarios against the public API.

use std::sync::Arc;

use concession_core::{
    Base, CoreError, Drink, Flavor, Food, FoodItem, Menu, Money, Order, OrderSummary, Priceable,
    Topping,
};

#[test]
fn test_every_valid_base_is_stored() {
    for base in Base::ALL {
        let mut drink = Drink::new();
        drink.add_base(base.as_str()).unwrap();
        assert_eq!(drink.base(), Some(*base));
    }
}

#[test]
fn test_invalid_base_leaves_prior_base() {
    let mut drink = Drink::new();
    drink.add_base("sbrite").unwrap();

    for bad in ["invalid_base", "Sbrite", " water", "lemon"] {
        assert!(matches!(
            drink.add_base(bad),
            Err(CoreError::InvalidArgument { .. })
        ));
        assert_eq!(drink.base(), Some(Base::Sbrite));
    }
}

#[test]
fn test_every_flavor_once_then_duplicate() {
    for flavor in Flavor::ALL {
        let mut drink = Drink::new();
        drink.add_flavor(flavor.as_str()).unwrap();
        assert!(drink.flavors().contains(flavor));
        assert!(matches!(
            drink.add_flavor(flavor.as_str()),
            Err(CoreError::DuplicateEntry { .. })
        ));
    }
}

#[test]
fn test_hotdog_with_chili() {
    let mut food = Food::new("Hotdog").unwrap();
    assert_eq!(food.price(), Money::from_cents(230));
    food.add_topping("Chili").unwrap();
    assert_eq!(food.price(), Money::from_cents(290));
}

#[test]
fn test_unknown_food_item() {
    assert!(matches!(
        Food::new("InvalidItem"),
        Err(CoreError::InvalidArgument { .. })
    ));
}

#[test]
fn test_topping_repeat_is_not_an_error_but_flavor_repeat_is() {
    let mut food = Food::new("Ice Cream").unwrap();
    food.add_topping("Cherry").unwrap();
    assert!(food.add_topping("Cherry").is_ok());
    assert_eq!(food.toppings(), vec![Topping::Cherry]);

    let mut drink = Drink::new();
    drink.add_flavor("cherry").unwrap();
    assert!(drink.add_flavor("cherry").is_err());
}

#[test]
fn test_empty_order() {
    let order = Order::new();
    assert_eq!(order.item_count(), 0);
    assert_eq!(order.total(), Money::zero());
}

#[test]
fn test_drink_and_food_total() {
    let mut drink = Drink::new();
    drink.add_base("water").unwrap();
    let mut food = Food::new("Hotdog").unwrap();
    food.add_topping("Chili").unwrap();

    let mut order = Order::new();
    order.add_item(drink);
    order.add_item(food);

    assert_eq!(order.total(), Money::from_cents(500 + 230 + 60));
    assert_eq!(order.total().to_string(), "$7.90");
}

#[test]
fn test_add_then_remove() {
    let mut order = Order::new();
    order.add_item(Drink::new());
    order.remove_item(0).unwrap();
    assert_eq!(order.item_count(), 0);
    assert!(order.is_empty());
}

#[test]
fn test_remove_out_of_range() {
    let mut order = Order::new();
    assert!(matches!(
        order.remove_item(0),
        Err(CoreError::OutOfRange { index: 0, len: 0 })
    ));

    order.add_item(Food::new("Onion Rings").unwrap());
    order.add_item(Food::new("French Fries").unwrap());
    assert!(matches!(
        order.remove_item(2),
        Err(CoreError::OutOfRange { index: 2, len: 2 })
    ));
    assert_eq!(order.item_count(), 2);
}

#[test]
fn test_full_menu_order() {
    let mut order = Order::new();
    for item in FoodItem::ALL {
        let mut food = Food::new(item.as_str()).unwrap();
        for topping in Topping::ALL {
            food.add_topping(topping.as_str()).unwrap();
        }
        order.add_item(food);
    }

    // $14.15 of food, $2.20 of toppings per item
    let expected = 1415 + 220 * FoodItem::ALL.len() as i64;
    assert_eq!(order.total().cents(), expected);
    assert!(order.items().iter().all(|item| item.price().cents() > 220));
}

#[test]
fn test_repriced_menu_does_not_touch_existing_items() {
    let mut order = Order::new();
    order.add_item(Drink::new());

    let happy_hour = Arc::new(
        Menu::default()
            .with_drink_price(Money::from_cents(300))
            .unwrap()
            .with_food_price(FoodItem::Corndog, Money::from_cents(100))
            .unwrap(),
    );
    order.add_item(Drink::from_menu(&happy_hour));
    order.add_item(Food::from_menu(Arc::clone(&happy_hour), "Corndog").unwrap());

    assert_eq!(order.total().cents(), 500 + 300 + 100);

    let summary = OrderSummary::from(&order);
    assert_eq!(summary.drink_count, 2);
    assert_eq!(summary.food_count, 1);
    assert_eq!(summary.total_cents, 900);
}
