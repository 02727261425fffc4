mod department_test;
