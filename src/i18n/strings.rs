//! Translation Strings
//!
//! Built-in English and Urdu dictionaries. Keys are shared between the two
//! tables and double as field keys on the record types.

pub const EN: &[(&str, &str)] = &[
    // Shell
    ("appName", "iCap Manager"),
    ("welcome", "Welcome to iCap Manager"),
    ("managementSystem", "Business Management System"),
    ("switchLanguage", "اردو"),
    ("toggleSidebar", "Toggle sidebar"),
    // Dashboard
    ("dashboard", "Dashboard"),
    ("totalSales", "Total Sales"),
    ("inventoryItems", "Inventory Items"),
    ("monthlyRevenue", "Monthly Revenue"),
    ("activeOrders", "Active Orders"),
    ("recentOrders", "Recent Orders"),
    ("inventoryStatus", "Inventory Status"),
    ("lowStockItems", "Low Stock Items"),
    ("comingSoon", "Coming soon..."),
    ("orderID", "Order ID"),
    ("status", "Status"),
    ("stock", "Stock"),
    // Inventory
    ("inventory", "Inventory"),
    ("addItem", "Add Item"),
    ("editItem", "Edit Item"),
    ("deleteItem", "Delete Item"),
    ("itemName", "Item Name"),
    ("quantity", "Quantity"),
    ("price", "Price"),
    ("reorderPoint", "Reorder Point"),
    ("itemAdded", "Item added successfully"),
    ("itemDeleted", "Item deleted successfully"),
    // Expenses
    ("expenses", "Expenses"),
    ("expensesList", "Expenses List"),
    ("addExpense", "Add Expense"),
    ("category", "Category"),
    ("date", "Date"),
    ("description", "Description"),
    ("amount", "Amount"),
    ("expenseAdded", "Expense added successfully"),
    ("expenseDeleted", "Expense deleted successfully"),
    // Sales
    ("sales", "Sales"),
    ("salesList", "Sales List"),
    ("newSale", "New Sale"),
    ("customer", "Customer"),
    ("product", "Product"),
    ("saleDate", "Sale Date"),
    ("total", "Total"),
    ("saleAdded", "Sale recorded successfully"),
    ("saleDeleted", "Sale deleted successfully"),
    // Packaging
    ("packaging", "Packaging"),
    ("packagingList", "Packaging List"),
    ("addPackaging", "Add Packaging"),
    ("packagingType", "Packaging Type"),
    ("materials", "Materials"),
    ("packagingAdded", "Packaging added successfully"),
    ("packagingDeleted", "Packaging deleted successfully"),
    // Delivery
    ("delivery", "Delivery"),
    ("deliveriesList", "Deliveries List"),
    ("addDelivery", "Add Delivery"),
    ("deliveryStatus", "Delivery Status"),
    ("address", "Address"),
    ("trackingNumber", "Tracking Number"),
    ("deliveryAdded", "Delivery added successfully"),
    ("deliveryDeleted", "Delivery deleted successfully"),
    // Resellers
    ("resellers", "Resellers"),
    ("resellersList", "Resellers List"),
    ("addReseller", "Add Reseller"),
    ("addNewReseller", "Add New Reseller"),
    ("resellerName", "Reseller Name"),
    ("contact", "Contact"),
    ("commission", "Commission"),
    ("resellerAdded", "Reseller added successfully"),
    ("resellerDeleted", "Reseller deleted successfully"),
    // Shared actions and messages
    ("actions", "Actions"),
    ("add", "Add"),
    ("cancel", "Cancel"),
    ("edit", "Edit"),
    ("delete", "Delete"),
    ("confirmDelete", "Delete?"),
    ("search", "Search..."),
    ("noRecords", "No records found"),
    ("error", "Error"),
    ("success", "Success"),
    ("notice", "Notice"),
    ("fillAllFields", "Please fill all fields"),
    ("invalidNumber", "Please enter a valid number"),
    ("editNotAvailable", "Editing is not available yet"),
];

pub const UR: &[(&str, &str)] = &[
    // Shell
    ("appName", "آئی کیپ مینیجر"),
    ("welcome", "iCap Manager میں خوش آمدید"),
    ("managementSystem", "کاروباری انتظامی نظام"),
    ("switchLanguage", "English"),
    ("toggleSidebar", "سائیڈ بار تبدیل کریں"),
    // Dashboard
    ("dashboard", "ڈیش بورڈ"),
    ("totalSales", "کل فروخت"),
    ("inventoryItems", "انوینٹری آئٹمز"),
    ("monthlyRevenue", "ماہانہ آمدنی"),
    ("activeOrders", "فعال آرڈرز"),
    ("recentOrders", "حالیہ آرڈرز"),
    ("inventoryStatus", "انوینٹری کی صورتحال"),
    ("lowStockItems", "کم اسٹاک آئٹمز"),
    ("comingSoon", "جلد آرہا ہے..."),
    ("orderID", "آرڈر ID"),
    ("status", "سٹیٹس"),
    ("stock", "اسٹاک"),
    // Inventory
    ("inventory", "انوینٹری"),
    ("addItem", "آئٹم شامل کریں"),
    ("editItem", "آئٹم میں ترمیم کریں"),
    ("deleteItem", "آئٹم حذف کریں"),
    ("itemName", "آئٹم کا نام"),
    ("quantity", "مقدار"),
    ("price", "قیمت"),
    ("reorderPoint", "ری آرڈر پوائنٹ"),
    ("itemAdded", "آئٹم کامیابی سے شامل ہو گیا"),
    ("itemDeleted", "آئٹم کامیابی سے حذف ہو گیا"),
    // Expenses
    ("expenses", "اخراجات"),
    ("expensesList", "اخراجات کی فہرست"),
    ("addExpense", "خرچہ شامل کریں"),
    ("category", "زمرہ"),
    ("date", "تاریخ"),
    ("description", "تفصیل"),
    ("amount", "رقم"),
    ("expenseAdded", "خرچہ کامیابی سے شامل ہو گیا"),
    ("expenseDeleted", "خرچہ کامیابی سے حذف ہو گیا"),
    // Sales
    ("sales", "سیلز"),
    ("salesList", "سیلز کی فہرست"),
    ("newSale", "نئی سیل"),
    ("customer", "کسٹمر"),
    ("product", "پروڈکٹ"),
    ("saleDate", "سیل کی تاریخ"),
    ("total", "کل"),
    ("saleAdded", "سیل کامیابی سے درج ہو گئی"),
    ("saleDeleted", "سیل کامیابی سے حذف ہو گئی"),
    // Packaging
    ("packaging", "پیکیجنگ"),
    ("packagingList", "پیکیجنگ کی فہرست"),
    ("addPackaging", "پیکیجنگ شامل کریں"),
    ("packagingType", "پیکیجنگ کی قسم"),
    ("materials", "مواد"),
    ("packagingAdded", "پیکیجنگ کامیابی سے شامل ہو گئی"),
    ("packagingDeleted", "پیکیجنگ کامیابی سے حذف ہو گئی"),
    // Delivery
    ("delivery", "ڈلیوری"),
    ("deliveriesList", "ڈلیوریز کی فہرست"),
    ("addDelivery", "ڈلیوری شامل کریں"),
    ("deliveryStatus", "ڈلیوری کی حیثیت"),
    ("address", "پتہ"),
    ("trackingNumber", "ٹریکنگ نمبر"),
    ("deliveryAdded", "ڈلیوری کامیابی سے شامل ہو گئی"),
    ("deliveryDeleted", "ڈلیوری کامیابی سے حذف ہو گئی"),
    // Resellers
    ("resellers", "ری سیلرز"),
    ("resellersList", "ری سیلرز کی فہرست"),
    ("addReseller", "ری سیلر شامل کریں"),
    ("addNewReseller", "نیا ری سیلر شامل کریں"),
    ("resellerName", "ری سیلر کا نام"),
    ("contact", "رابطہ"),
    ("commission", "کمیشن"),
    ("resellerAdded", "ری سیلر کامیابی سے شامل ہو گیا"),
    ("resellerDeleted", "ری سیلر کامیابی سے حذف ہو گیا"),
    // Shared actions and messages
    ("actions", "اقدامات"),
    ("add", "شامل کریں"),
    ("cancel", "منسوخ کریں"),
    ("edit", "ترمیم"),
    ("delete", "حذف کریں"),
    ("confirmDelete", "حذف کریں؟"),
    ("search", "تلاش کریں..."),
    ("noRecords", "کوئی ریکارڈ نہیں ملا"),
    ("error", "خرابی"),
    ("success", "کامیابی"),
    ("notice", "اطلاع"),
    ("fillAllFields", "براہ کرم تمام خانے پُر کریں"),
    ("invalidNumber", "براہ کرم درست نمبر درج کریں"),
    ("editNotAvailable", "ترمیم ابھی دستیاب نہیں ہے"),
];
