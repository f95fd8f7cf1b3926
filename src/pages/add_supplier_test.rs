use super::*;

fn valid_form() -> SupplierForm {
    SupplierForm {
        name: "Northwind Fibers".to_owned(),
        category: "Textiles".to_owned(),
        location: "Raleigh, NC".to_owned(),
        tier: "secondary".to_owned(),
        website: "https://northwind.example.co".to_owned(),
        contact_email: "hello@northwind.example.co".to_owned(),
        certifications: "GOTS, Fair Trade, ".to_owned(),
    }
}

#[test]
fn valid_form_produces_a_supplier() {
    let supplier = validate_supplier_form(&valid_form()).unwrap();
    assert_eq!(supplier.name, "Northwind Fibers");
    assert_eq!(supplier.tier, SupplierTier::Secondary);
    assert_eq!(supplier.website.as_deref(), Some("https://northwind.example.co"));
    assert_eq!(supplier.certifications, ["GOTS", "Fair Trade"]);
}

#[test]
fn optional_fields_may_be_empty() {
    let mut form = valid_form();
    form.website = String::new();
    form.contact_email = String::new();
    form.certifications = String::new();
    let supplier = validate_supplier_form(&form).unwrap();
    assert!(supplier.website.is_none());
    assert!(supplier.contact_email.is_none());
    assert!(supplier.certifications.is_empty());
}

#[test]
fn unknown_tier_defaults_to_primary() {
    let mut form = valid_form();
    form.tier = String::new();
    assert_eq!(validate_supplier_form(&form).unwrap().tier, SupplierTier::Primary);
}

#[test]
fn every_failing_field_is_reported_at_once() {
    let form = SupplierForm {
        name: "x".to_owned(),
        category: String::new(),
        location: "y".to_owned(),
        tier: "primary".to_owned(),
        website: "not-a-url".to_owned(),
        contact_email: "not-an-email".to_owned(),
        certifications: String::new(),
    };
    let errors = validate_supplier_form(&form).unwrap_err();
    assert_eq!(errors.name, Some("Name must be at least 2 characters"));
    assert_eq!(errors.category, Some("Please select a category"));
    assert_eq!(errors.location, Some("Location must be at least 2 characters"));
    assert_eq!(errors.website, Some("Please enter a valid URL"));
    assert_eq!(errors.contact_email, Some("Please enter a valid email"));
}

#[test]
fn errors_is_empty_only_when_no_field_failed() {
    assert!(SupplierFormErrors::default().is_empty());
    let errors = SupplierFormErrors { name: Some("bad"), ..SupplierFormErrors::default() };
    assert!(!errors.is_empty());
}
