//! Tab labels - single source of truth for tab titles.

/// Readable tab title for the given key. Fallback: the key itself.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_overview" => "Dashboard",

        // ── Use Cases (u5xx) ──────────────────────────────────────────────
        "u501_pos_sale" => "Atendimento",

        // ── Aggregates (aXXX) ─────────────────────────────────────────────
        "a001_product" => "Produtos",
        "a002_customer" => "Clientes",
        "a003_supplier" => "Fornecedores",
        "a004_order" => "Pedidos",
        "a005_invoice" => "Notas Fiscais",
        "a006_stock_item" => "Estoque",

        _ => "Desconhecido",
    }
}
