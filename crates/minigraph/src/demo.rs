//! The requests replayed by `--demo`, written against the built-in coffee shop data.

pub(crate) struct DemoRequest {
    pub title: &'static str,
    pub request: &'static str,
}

pub(crate) const REQUESTS: &[DemoRequest] = &[
    DemoRequest {
        title: "simple query",
        request: r#"{
  coffee(id: "coffee1") {
    name
    price
  }
}"#,
    },
    DemoRequest {
        title: "nested query with relationships",
        request: r#"{
  customer(id: "cust1") {
    name
    email
    orders {
      id
      items {
        name
        price
        origin
      }
      totalAmount
    }
  }
}"#,
    },
    DemoRequest {
        title: "multiple queries in one request",
        request: r#"{
  latte: coffee(id: "coffee1") {
    name
    origin
  }
  espresso: coffee(id: "coffee2") {
    name
    price
  }
  cappuccino: coffee(id: "coffee3") {
    name
    price
    origin
  }
}"#,
    },
    DemoRequest {
        title: "selective field loading",
        request: r#"{
  allCoffees {
    name
    # price and origin are not requested
  }
}"#,
    },
];
