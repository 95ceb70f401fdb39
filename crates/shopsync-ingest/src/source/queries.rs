//! GraphQL documents, one per resource. Each requests exactly the fields the
//! normalizers read.

pub const INVENTORY: &str = r#"
query InventoryLevels($first: Int!, $query: String) {
  inventoryItems(first: $first, query: $query) {
    edges {
      node {
        id
        sku
        tracked
        inventoryLevels(first: 50) {
          edges {
            node {
              location { id name }
              quantities(names: ["available"]) { name quantity }
            }
          }
        }
      }
    }
  }
}
"#;

pub const ORDERS: &str = r#"
query Orders($first: Int!, $query: String) {
  orders(first: $first, query: $query, sortKey: UPDATED_AT, reverse: true) {
    edges {
      node {
        id
        name
        orderNumber: number
        createdAt
        updatedAt
        processedAt
        cancelledAt
        closedAt
        currentTotalPriceSet { shopMoney { amount currencyCode } }
        subtotalPriceSet { shopMoney { amount currencyCode } }
        totalTaxSet { shopMoney { amount currencyCode } }
        totalDiscountsSet { shopMoney { amount currencyCode } }
        presentmentCurrencyCode
        displayFinancialStatus
        displayFulfillmentStatus
        confirmationNumber
        customer { id email phone }
        billingAddress { address1 address2 city province country zip }
        shippingAddress { address1 address2 city province country zip }
        test
        tags
        note
        sourceName
        lineItems(first: 100) {
          edges { node { quantity } }
        }
      }
    }
  }
}
"#;

pub const CUSTOMERS: &str = r#"
query Customers($first: Int!, $query: String) {
  customers(first: $first, query: $query) {
    edges {
      node {
        id
        email
        firstName
        lastName
        phone
        createdAt
        updatedAt
        verifiedEmail
        state
        defaultAddress { address1 address2 city province country zip }
      }
    }
  }
}
"#;
