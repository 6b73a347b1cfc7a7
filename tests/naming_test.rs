use fsdgen::naming::{is_pascal_case, to_camel_case, to_pascal_case, Names};

#[test]
fn test_pascal_case() {
    assert_eq!(to_pascal_case("user-profile"), "UserProfile");
    assert_eq!(to_pascal_case("shopping_cart"), "ShoppingCart");
    assert_eq!(to_pascal_case("order"), "Order");
    assert_eq!(to_pascal_case("mixed-delimiters_here"), "MixedDelimitersHere");
}

#[test]
fn test_pascal_case_lowercases_inside_words() {
    assert_eq!(to_pascal_case("userProfile"), "Userprofile");
    assert_eq!(to_pascal_case("API-client"), "ApiClient");
}

#[test]
fn test_pascal_case_skips_empty_words() {
    assert_eq!(to_pascal_case("--cart__item-"), "CartItem");
    assert_eq!(to_pascal_case(""), "");
}

#[test]
fn test_camel_case() {
    assert_eq!(to_camel_case("user-profile"), "userProfile");
    assert_eq!(to_camel_case("shopping_cart"), "shoppingCart");
    assert_eq!(to_camel_case("Theme"), "theme");
    assert_eq!(to_camel_case(""), "");
}

#[test]
fn test_is_pascal_case() {
    assert!(is_pascal_case("Button"));
    assert!(is_pascal_case("UserProfile2"));
    assert!(is_pascal_case("X"));

    assert!(!is_pascal_case("button"));
    assert!(!is_pascal_case("123Foo"));
    assert!(!is_pascal_case("My-Button"));
    assert!(!is_pascal_case("My_Button"));
    assert!(!is_pascal_case(""));
}

#[test]
fn test_names_context() {
    let names = Names::new("shopping-cart");

    assert_eq!(names.raw, "shopping-cart");
    assert_eq!(names.pascal, "ShoppingCart");
    assert_eq!(names.camel, "shoppingCart");
    assert_eq!(
        names.context(),
        serde_json::json!({"name": "shopping-cart", "pascal": "ShoppingCart", "camel": "shoppingCart"})
    );
}
