//! Wire types for the vendor OCR response and the normalized invoice contract.

use serde::{Deserialize, Serialize};

/// Top-level vendor payload. Everything the OCR read sits under `data`; a
/// response without it is treated as an empty read.
#[derive(Debug, Default, Deserialize)]
pub struct VendorResponse {
    #[serde(default)]
    pub data: VendorInvoice,
}

/// Raw field set returned by the invoice OCR endpoint. Field names are the
/// vendor's; absent fields deserialize to empty values.
#[derive(Debug, Default, Deserialize)]
pub struct VendorInvoice {
    #[serde(rename = "发票类型", default)]
    pub invoice_type: String,
    #[serde(rename = "标题", default)]
    pub title: String,
    #[serde(rename = "发票代码", default)]
    pub invoice_code: String,
    #[serde(rename = "发票号码", default)]
    pub invoice_number: String,
    #[serde(rename = "校验码", default)]
    pub check_code: String,
    #[serde(rename = "开票日期", default)]
    pub invoice_date: String,
    #[serde(rename = "发票金额", default)]
    pub total_amount: String,
    #[serde(rename = "不含税金额", default)]
    pub amount_without_tax: String,
    #[serde(rename = "发票税额", default)]
    pub tax_amount: String,
    #[serde(rename = "大写金额", default)]
    pub amount_in_words: String,
    #[serde(rename = "销售方名称", default)]
    pub seller_name: String,
    #[serde(rename = "销售方税号", default)]
    pub seller_tax_id: String,
    #[serde(rename = "受票方名称", default)]
    pub purchaser_name: String,
    #[serde(rename = "受票方税号", default)]
    pub purchaser_tax_id: String,
    #[serde(rename = "发票详单", default)]
    pub items: Vec<VendorLineItem>,
    #[serde(rename = "特殊标识信息", default)]
    pub special_mark: String,
    #[serde(rename = "备注", default)]
    pub remark: String,
}

/// One line of the vendor's 发票详单 detail list.
#[derive(Debug, Default, Deserialize)]
pub struct VendorLineItem {
    #[serde(rename = "货物或应税劳务、服务名称", default)]
    pub name: String,
    #[serde(rename = "规格型号", default)]
    pub spec: String,
    #[serde(rename = "单位", default)]
    pub unit: String,
    #[serde(rename = "数量", default)]
    pub quantity: String,
    #[serde(rename = "单价", default)]
    pub unit_price: String,
    #[serde(rename = "金额", default)]
    pub amount: String,
    #[serde(rename = "税率", default)]
    pub tax_rate: String,
}

/// Normalized invoice sent to the frontend. Fields the OCR did not read are
/// dropped from the serialized object entirely.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedInvoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_without_tax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_in_words: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchaser_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchaser_tax_id: Option<String>,
    /// An empty detail list carries no information, so it is dropped like the
    /// scalar fields rather than serialized as `[]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<InvoiceItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_mark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub name: String,
    pub spec: String,
    pub unit: String,
    pub quantity: String,
    pub unit_price: String,
    pub amount: String,
    pub tax_rate: String,
}

impl ExtractedInvoice {
    /// Rename the vendor fields onto the normalized contract, reformatting the
    /// issue date and mapping the detail list per item.
    pub fn from_vendor(raw: VendorInvoice) -> Self {
        Self {
            invoice_type: non_empty(raw.invoice_type),
            title: non_empty(raw.title),
            invoice_code: non_empty(raw.invoice_code),
            invoice_number: non_empty(raw.invoice_number),
            check_code: non_empty(raw.check_code),
            invoice_date: non_empty(raw.invoice_date).map(|d| format_invoice_date(&d)),
            total_amount: non_empty(raw.total_amount),
            amount_without_tax: non_empty(raw.amount_without_tax),
            tax_amount: non_empty(raw.tax_amount),
            amount_in_words: non_empty(raw.amount_in_words),
            seller_name: non_empty(raw.seller_name),
            seller_tax_id: non_empty(raw.seller_tax_id),
            purchaser_name: non_empty(raw.purchaser_name),
            purchaser_tax_id: non_empty(raw.purchaser_tax_id),
            items: raw.items.into_iter().map(InvoiceItem::from_vendor).collect(),
            special_mark: non_empty(raw.special_mark),
            remark: non_empty(raw.remark),
        }
    }
}

impl InvoiceItem {
    fn from_vendor(raw: VendorLineItem) -> Self {
        Self {
            name: raw.name,
            spec: raw.spec,
            unit: raw.unit,
            quantity: raw.quantity,
            unit_price: raw.unit_price,
            amount: raw.amount,
            tax_rate: raw.tax_rate,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// `2025年09月09日` -> `2025-09-09`. Values already in another format pass
/// through untouched.
pub fn format_invoice_date(date: &str) -> String {
    date.replace('年', "-").replace('月', "-").replace('日', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_vendor_payload() -> serde_json::Value {
        json!({
            "发票类型": "增值税电子普通发票",
            "标题": "浙江增值税电子普通发票",
            "发票代码": "033001900211",
            "发票号码": "12262866",
            "校验码": "05099 68742 12519 94021",
            "开票日期": "2025年09月09日",
            "发票金额": "1060.00",
            "不含税金额": "1000.00",
            "发票税额": "60.00",
            "大写金额": "壹仟零陆拾圆整",
            "销售方名称": "杭州某某科技有限公司",
            "销售方税号": "91330106MA2AYE8L1X",
            "受票方名称": "宁波某某贸易有限公司",
            "受票方税号": "91330201MA2CH1JC9K",
            "发票详单": [
                {
                    "货物或应税劳务、服务名称": "*信息技术服务*软件开发",
                    "规格型号": "V1.0",
                    "单位": "项",
                    "数量": "1",
                    "单价": "1000.00",
                    "金额": "1000.00",
                    "税率": "6%"
                }
            ],
            "特殊标识信息": "",
            "备注": "合同号:HT-2025-031"
        })
    }

    #[test]
    fn formats_chinese_invoice_date() {
        assert_eq!(format_invoice_date("2025年09月09日"), "2025-09-09");
        assert_eq!(format_invoice_date("2025-09-09"), "2025-09-09");
    }

    #[test]
    fn maps_all_recognized_fields() {
        let raw: VendorInvoice = serde_json::from_value(full_vendor_payload()).unwrap();
        let invoice = ExtractedInvoice::from_vendor(raw);

        assert_eq!(invoice.invoice_type.as_deref(), Some("增值税电子普通发票"));
        assert_eq!(invoice.title.as_deref(), Some("浙江增值税电子普通发票"));
        assert_eq!(invoice.invoice_code.as_deref(), Some("033001900211"));
        assert_eq!(invoice.invoice_number.as_deref(), Some("12262866"));
        assert_eq!(invoice.check_code.as_deref(), Some("05099 68742 12519 94021"));
        assert_eq!(invoice.invoice_date.as_deref(), Some("2025-09-09"));
        assert_eq!(invoice.total_amount.as_deref(), Some("1060.00"));
        assert_eq!(invoice.amount_without_tax.as_deref(), Some("1000.00"));
        assert_eq!(invoice.tax_amount.as_deref(), Some("60.00"));
        assert_eq!(invoice.amount_in_words.as_deref(), Some("壹仟零陆拾圆整"));
        assert_eq!(invoice.seller_name.as_deref(), Some("杭州某某科技有限公司"));
        assert_eq!(invoice.seller_tax_id.as_deref(), Some("91330106MA2AYE8L1X"));
        assert_eq!(invoice.purchaser_name.as_deref(), Some("宁波某某贸易有限公司"));
        assert_eq!(invoice.purchaser_tax_id.as_deref(), Some("91330201MA2CH1JC9K"));
        assert_eq!(invoice.remark.as_deref(), Some("合同号:HT-2025-031"));

        assert_eq!(invoice.items.len(), 1);
        let item = &invoice.items[0];
        assert_eq!(item.name, "*信息技术服务*软件开发");
        assert_eq!(item.spec, "V1.0");
        assert_eq!(item.unit, "项");
        assert_eq!(item.quantity, "1");
        assert_eq!(item.unit_price, "1000.00");
        assert_eq!(item.amount, "1000.00");
        assert_eq!(item.tax_rate, "6%");

        // 特殊标识信息 came back empty and must not survive the mapping
        assert!(invoice.special_mark.is_none());
    }

    #[test]
    fn empty_and_absent_fields_are_dropped_from_json() {
        let raw: VendorInvoice = serde_json::from_value(json!({
            "发票号码": "12262866",
            "校验码": ""
        }))
        .unwrap();
        let invoice = ExtractedInvoice::from_vendor(raw);

        let serialized = serde_json::to_value(&invoice).unwrap();
        let object = serialized.as_object().unwrap();
        assert_eq!(object.get("invoice_number"), Some(&json!("12262866")));
        assert!(!object.contains_key("check_code"));
        assert!(!object.contains_key("seller_name"));
        assert!(!object.contains_key("items"));
    }

    #[test]
    fn empty_detail_list_is_omitted() {
        let raw: VendorInvoice = serde_json::from_value(json!({
            "发票号码": "12262866",
            "发票详单": []
        }))
        .unwrap();
        let invoice = ExtractedInvoice::from_vendor(raw);

        let serialized = serde_json::to_value(&invoice).unwrap();
        assert!(!serialized.as_object().unwrap().contains_key("items"));
    }

    #[test]
    fn item_fields_keep_empty_strings() {
        let raw: VendorInvoice = serde_json::from_value(json!({
            "发票详单": [{"货物或应税劳务、服务名称": "咨询服务"}]
        }))
        .unwrap();
        let invoice = ExtractedInvoice::from_vendor(raw);

        let serialized = serde_json::to_value(&invoice).unwrap();
        let item = &serialized["items"][0];
        assert_eq!(item["name"], "咨询服务");
        assert_eq!(item["spec"], "");
        assert_eq!(item["tax_rate"], "");
    }
}
