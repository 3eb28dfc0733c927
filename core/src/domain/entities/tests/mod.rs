mod inventory_tests;
