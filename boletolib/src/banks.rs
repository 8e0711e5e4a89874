//! Справочник банков-эмитентов: трёхзначный код → название.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static BANKS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("001", "Banco do Brasil S.A."),
        ("003", "Banco da Amazônia S.A."),
        ("004", "Banco do Nordeste do Brasil S.A."),
        ("021", "Banestes S.A. Banco do Estado do Espírito Santo"),
        ("033", "Banco Santander (Brasil) S.A."),
        ("037", "Banco do Estado do Pará S.A."),
        ("041", "Banco do Estado do Rio Grande do Sul S.A."),
        ("047", "Banco do Estado de Sergipe S.A."),
        ("070", "BRB - Banco de Brasília S.A."),
        ("077", "Banco Inter S.A."),
        ("084", "Uniprime Norte do Paraná"),
        ("085", "Cooperativa Central de Crédito - Ailos"),
        ("104", "Caixa Econômica Federal"),
        ("136", "Unicred Cooperativa"),
        ("197", "Stone Pagamentos S.A."),
        ("208", "Banco BTG Pactual S.A."),
        ("212", "Banco Original S.A."),
        ("218", "Banco BS2 S.A."),
        ("237", "Banco Bradesco S.A."),
        ("246", "Banco ABC Brasil S.A."),
        ("260", "Nu Pagamentos S.A."),
        ("290", "PagSeguro Internet S.A."),
        ("323", "Mercado Pago"),
        ("336", "Banco C6 S.A."),
        ("341", "Itaú Unibanco S.A."),
        ("380", "PicPay Serviços S.A."),
        ("389", "Banco Mercantil do Brasil S.A."),
        ("422", "Banco Safra S.A."),
        ("461", "Asaas"),
        ("481", "Superlógica Sociedade de Crédito Direto S.A."),
        ("623", "Banco Pan S.A."),
        ("633", "Banco Rendimento S.A."),
        ("637", "Banco Sofisa S.A."),
        ("655", "Banco Votorantim S.A."),
        ("707", "Banco Daycoval S.A."),
        ("739", "Banco Cetelem S.A."),
        ("745", "Banco Citibank S.A."),
        ("746", "Banco Modal S.A."),
        ("748", "Banco Cooperativo Sicredi S.A."),
        ("752", "Banco BNP Paribas Brasil S.A."),
        ("756", "Banco Cooperativo do Brasil S.A. - Bancoob"),
    ])
});

/// Название банка; пустая строка для неизвестного кода.
pub fn bank_name(code: &str) -> &'static str {
    BANKS.get(code).copied().unwrap_or_default()
}
